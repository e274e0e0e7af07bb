use std::fmt;

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    models::thermal::cooling::core::{CoolingConstants, SimulationParameters, Substance},
    support::units::TemperatureDifference,
};

/// Largest reference/equilibrium gap still treated as a match, in kelvin.
const EQUILIBRIUM_TOLERANCE: f64 = 1e-9;

/// A questionable but runnable simulation setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationWarning {
    /// The constants were fitted against a different equilibrium than the
    /// one being simulated, so the dynamics are not consistent with the data.
    EquilibriumMismatch {
        reference: ThermodynamicTemperature,
        equilibrium: ThermodynamicTemperature,
    },

    /// `c * dt >= 1`: each Euler step overshoots equilibrium.
    CoarseTimeStep {
        substance: Substance,
        decay_per_step: f64,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EquilibriumMismatch {
                reference,
                equilibrium,
            } => write!(
                f,
                "constants were calibrated towards {} °C but the simulation settles at {} °C",
                reference.get::<degree_celsius>(),
                equilibrium.get::<degree_celsius>(),
            ),
            Self::CoarseTimeStep {
                substance,
                decay_per_step,
            } => write!(
                f,
                "{substance} sheds {decay_per_step} of its excess temperature per step; \
                 the step overshoots equilibrium"
            ),
        }
    }
}

/// Collects the warnings that apply to this setup.
pub(super) fn check(
    params: &SimulationParameters,
    constants: &CoolingConstants,
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let gap = constants
        .reference_temperature
        .minus(params.equilibrium_temperature)
        .abs();
    if gap > TemperatureInterval::new::<delta_kelvin>(EQUILIBRIUM_TOLERANCE) {
        warnings.push(ValidationWarning::EquilibriumMismatch {
            reference: constants.reference_temperature,
            equilibrium: params.equilibrium_temperature,
        });
    }

    for substance in Substance::ALL {
        let decay_per_step = constants.get(substance).decay_over(params.time_step);
        if decay_per_step >= 1.0 {
            warnings.push(ValidationWarning::CoarseTimeStep {
                substance,
                decay_per_step,
            });
        }
    }

    warnings
}
