use thiserror::Error;

use crate::{models::thermal::cooling::core::Substance, support::constraint::ConstraintError};

/// Errors that can occur while building a sample table or fitting constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalibrationError {
    /// A finite difference needs at least two samples.
    #[error("at least two samples are required, got {count}")]
    TooFewSamples { count: usize },

    /// Sample times must strictly increase.
    #[error("sample time at row {row} does not follow the previous row")]
    NonIncreasingTime { row: usize },

    /// A time or temperature is NaN or infinite.
    #[error("sample row {row} contains a non-finite value")]
    NonFinite { row: usize },

    /// A sample sits exactly at the reference temperature.
    ///
    /// The rate estimate divides by the excess over the reference, so this
    /// row cannot be used.
    #[error("{substance} sample at row {row} equals the reference temperature")]
    AtReference { substance: Substance, row: usize },

    /// The averaged rate is zero, negative, or not a number.
    ///
    /// This happens when the samples move away from the reference instead
    /// of towards it.
    #[error("{substance} cooling rate is not physical")]
    NonPhysicalRate {
        substance: Substance,
        #[source]
        source: ConstraintError,
    },
}
