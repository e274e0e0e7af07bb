use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature, Time},
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use crate::support::constraint::StrictlyPositive;

use super::{SimulationError, grid::TimeGrid};

/// How the sampled cream-addition times are spread over the first quarter
/// of the simulated interval.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CreamSpacing {
    /// Offsets `quarter / 2^k` for `k in 0..count`, so times near the start
    /// are sampled most densely.
    #[default]
    Geometric,

    /// Evenly spaced offsets `k * quarter / count` for `k in 1..=count`.
    Linear,

    /// Explicit times, snapped to the nearest simulated step.
    ///
    /// The cream sample count is ignored.
    At(Vec<Time>),
}

/// Inputs for a cooling simulation.
///
/// The [`Default`] is the reference scenario: a 90 °C cup cooling towards a
/// 20 °C room for 40 minutes in 0.001-minute steps, where the drinker wants
/// 75 °C and cream lowers the temperature by 5 °C.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// Time of the first sample.
    pub start_time: Time,

    /// End of the simulated interval (exclusive).
    pub end_time: Time,

    /// Fixed integration step. Must be positive and shorter than the interval.
    pub time_step: Time,

    /// Temperature of the black coffee at `start_time`.
    pub initial_temperature: ThermodynamicTemperature,

    /// Temperature the coffee approaches as time goes on.
    pub equilibrium_temperature: ThermodynamicTemperature,

    /// Drinking temperature to aim for, if any.
    pub preferred_temperature: Option<ThermodynamicTemperature>,

    /// Instant temperature change when cream is added (usually negative).
    pub cream_temperature_delta: TemperatureInterval,

    /// Number of sampled cream-addition times.
    pub cream_sample_count: usize,

    /// How the sampled cream-addition times are spread.
    pub cream_spacing: CreamSpacing,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            start_time: Time::new::<minute>(0.0),
            end_time: Time::new::<minute>(40.0),
            time_step: Time::new::<minute>(0.001),
            initial_temperature: ThermodynamicTemperature::new::<degree_celsius>(90.0),
            equilibrium_temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
            preferred_temperature: Some(ThermodynamicTemperature::new::<degree_celsius>(75.0)),
            cream_temperature_delta: TemperatureInterval::new::<delta_celsius>(-5.0),
            cream_sample_count: 8,
            cream_spacing: CreamSpacing::default(),
        }
    }
}

impl SimulationParameters {
    /// Checks every parameter and lays out the simulation grid.
    ///
    /// # Errors
    ///
    /// Returns a [`SimulationError`] for non-finite values, a non-positive
    /// time step, an empty interval, or a step that spans the whole interval.
    pub(crate) fn grid(&self) -> Result<TimeGrid, SimulationError> {
        let finite = [
            ("start_time", self.start_time.value),
            ("end_time", self.end_time.value),
            ("initial_temperature", self.initial_temperature.value),
            ("equilibrium_temperature", self.equilibrium_temperature.value),
            ("cream_temperature_delta", self.cream_temperature_delta.value),
        ];
        if let Some(&(name, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimulationError::NonFinite { name });
        }
        if self
            .preferred_temperature
            .is_some_and(|preferred| !preferred.value.is_finite())
        {
            return Err(SimulationError::NonFinite {
                name: "preferred_temperature",
            });
        }

        let step = StrictlyPositive::new(self.time_step).map_err(SimulationError::InvalidTimeStep)?;

        TimeGrid::new(self.start_time, self.end_time, step)
    }
}
