use thiserror::Error;
use uom::si::f64::Time;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while setting up or running a cooling simulation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimulationError {
    /// The time step is zero, negative, or not a number.
    #[error("invalid time step")]
    InvalidTimeStep(#[source] ConstraintError),

    /// The end time does not come after the start time, leaving no steps.
    #[error("end time {end:?} does not follow start time {start:?}")]
    EmptyInterval { start: Time, end: Time },

    /// A single step covers the whole interval.
    #[error("time step {time_step:?} is not shorter than the interval {span:?}")]
    TimeStepTooLarge { time_step: Time, span: Time },

    /// The interval holds more steps than a grid may store.
    #[error(
        "{steps} time steps exceed the limit of {max}",
        max = crate::models::thermal::cooling::core::grid::TimeGrid::MAX_STEPS
    )]
    TooManySteps { steps: f64 },

    /// A parameter is NaN or infinite.
    #[error("{name} is not finite")]
    NonFinite { name: &'static str },

    /// A requested cream time does not map onto a simulated step.
    #[error("cream time {time:?} is outside the simulated interval")]
    EventOutOfRange { time: Time },
}
