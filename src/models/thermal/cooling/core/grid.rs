use uom::si::{f64::Time, time::second};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::SimulationError;

/// Uniform sample times `start + n * step` for `n in 0..len`.
///
/// The grid covers the half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TimeGrid {
    start: Time,
    step: Time,
    len: usize,
}

impl TimeGrid {
    /// Relative slack when deciding whether the interval holds a whole number of steps.
    const WHOLE_STEP_TOLERANCE: f64 = 1e-9;

    /// Largest number of samples a grid may hold.
    pub(crate) const MAX_STEPS: usize = 10_000_000;

    /// Lays a grid over `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptyInterval`] if `end <= start`,
    /// [`SimulationError::TimeStepTooLarge`] if a single step spans the interval,
    /// or [`SimulationError::TooManySteps`] if the grid would exceed
    /// [`Self::MAX_STEPS`] samples.
    pub(crate) fn new(
        start: Time,
        end: Time,
        step: Constrained<Time, StrictlyPositive>,
    ) -> Result<Self, SimulationError> {
        let step = step.into_inner();

        if end <= start {
            return Err(SimulationError::EmptyInterval { start, end });
        }

        let span = end - start;
        if step >= span {
            return Err(SimulationError::TimeStepTooLarge {
                time_step: step,
                span,
            });
        }

        let steps = span.get::<second>() / step.get::<second>();
        let whole = steps.round();
        let count = if (steps - whole).abs() <= Self::WHOLE_STEP_TOLERANCE * whole {
            whole
        } else {
            steps.ceil()
        };

        #[allow(clippy::cast_precision_loss)]
        let max = Self::MAX_STEPS as f64;
        if !count.is_finite() || count > max {
            return Err(SimulationError::TooManySteps { steps: count });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = count as usize;

        Ok(Self { start, step, len })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn step(&self) -> Time {
        self.step
    }

    /// The time of the sample at `index`.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn time_at(&self, index: usize) -> Time {
        self.start + self.step * index as f64
    }

    /// The index of the grid time nearest to `time`.
    ///
    /// Halfway cases round away from the start. Returns `None` when the
    /// nearest index falls outside the grid.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub(crate) fn nearest_index(&self, time: Time) -> Option<usize> {
        let position = ((time - self.start).get::<second>() / self.step.get::<second>()).round();
        (position >= 0.0 && position < self.len as f64).then(|| position as usize)
    }
}
