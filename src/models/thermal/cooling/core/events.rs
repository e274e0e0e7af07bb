//! Candidate moments for adding cream.

use uom::si::f64::Time;

use super::{CreamSpacing, SimulationError, SimulationParameters, grid::TimeGrid};

/// Ratio between consecutive geometric offsets.
const GEOMETRIC_RATIO: f64 = 0.5;

/// Why a cream event was simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreamEventKind {
    /// The first moment the creamed coffee would be at or below the
    /// preferred temperature.
    Recommended,

    /// One of the sampled cream-addition times.
    Sampled,
}

/// A moment at which cream is added, tied to its simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreamEvent {
    /// Grid time of the event.
    pub time: Time,

    /// Index of the event in the black-coffee trajectory.
    pub index: usize,

    pub kind: CreamEventKind,
}

/// Places the sampled cream events on the grid, ordered by time.
///
/// Requested times are snapped to the nearest grid step and the event
/// carries that step's index and time.
///
/// # Errors
///
/// Returns [`SimulationError::EventOutOfRange`] if an explicit time does
/// not fall on the grid.
#[allow(clippy::cast_precision_loss)]
pub(super) fn sampled_events(
    params: &SimulationParameters,
    grid: &TimeGrid,
) -> Result<Vec<CreamEvent>, SimulationError> {
    let count = params.cream_sample_count;
    let quarter = (params.end_time - params.start_time) / 4.0;

    let times = match &params.cream_spacing {
        CreamSpacing::Geometric => {
            let mut offset = quarter;
            let mut times = Vec::with_capacity(count);
            for _ in 0..count {
                times.push(params.start_time + offset);
                offset *= GEOMETRIC_RATIO;
            }
            times.reverse();
            times
        }
        CreamSpacing::Linear => {
            let spacing = quarter / count.max(1) as f64;
            (1..=count)
                .map(|k| params.start_time + spacing * k as f64)
                .collect()
        }
        CreamSpacing::At(times) => times.clone(),
    };

    times
        .into_iter()
        .map(|time| {
            grid.nearest_index(time)
                .map(|index| CreamEvent {
                    time: grid.time_at(index),
                    index,
                    kind: CreamEventKind::Sampled,
                })
                .ok_or(SimulationError::EventOutOfRange { time })
        })
        .collect()
}
