//! Cooling-constant estimation from measured samples.
//!
//! For each consecutive pair of samples the instantaneous rate is estimated
//! with a first-order finite difference,
//!
//! ```text
//! c_i = -(T_{i+1} - T_i) / ((T_i - T_ref) * (t_{i+1} - t_i))
//! ```
//!
//! and the constant for a substance is the arithmetic mean of the `c_i`.
//! The estimate carries a discretization error proportional to the sample
//! spacing.

mod config;
mod error;

pub use config::CalibrationConfig;
pub use error::CalibrationError;

use tracing::{debug, info};
use uom::{
    ConstZero,
    si::{
        f64::{Frequency, ThermodynamicTemperature},
        frequency::hertz,
        temperature_interval::kelvin as delta_kelvin,
        time::second,
    },
};

use crate::support::{constraint::NonZero, units::TemperatureDifference};

use super::{CoolingConstant, CoolingConstants, SampleTable, Substance};

/// Fits one cooling constant per substance to the sample table.
///
/// # Errors
///
/// Returns a [`CalibrationError`] if the table is too short, a sample sits
/// exactly at the reference temperature, or a fitted rate is not strictly
/// positive.
pub(crate) fn calibrate(
    table: &SampleTable,
    config: &CalibrationConfig,
) -> Result<CoolingConstants, CalibrationError> {
    let reference = config.reference_temperature;

    let black = fit(table, Substance::Black, reference)?;
    let cream = fit(table, Substance::Cream, reference)?;

    let constants = CoolingConstants::new(black, cream, reference);
    info!(%constants, samples = table.len(), "calibrated cooling constants");

    Ok(constants)
}

/// Averages the finite-difference rate estimates for one substance.
fn fit(
    table: &SampleTable,
    substance: Substance,
    reference: ThermodynamicTemperature,
) -> Result<CoolingConstant, CalibrationError> {
    // `SampleTable` guarantees at least two rows.
    let rows = table.rows();

    let mut total = Frequency::ZERO;

    for (row, pair) in rows.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);

        let excess = NonZero::new(current.temperature(substance).minus(reference))
            .map_err(|_| CalibrationError::AtReference { substance, row })?;
        let change = next
            .temperature(substance)
            .minus(current.temperature(substance));
        let elapsed = next.time - current.time;

        let rate = -change.get::<delta_kelvin>()
            / (excess.as_ref().get::<delta_kelvin>() * elapsed.get::<second>());
        total += Frequency::new::<hertz>(rate);
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = total / (rows.len() - 1) as f64;

    let constant = CoolingConstant::from_quantity(mean)
        .map_err(|source| CalibrationError::NonPhysicalRate { substance, source })?;

    debug!(%substance, per_minute = constant.per_minute(), "fitted cooling constant");

    Ok(constant)
}
