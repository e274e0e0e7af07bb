//! Lumped cooling of a cup of coffee, with and without cream.
//!
//! The coffee is treated as a single well-mixed body obeying Newton's law of
//! cooling, `dT/dt = -c (T - T_eq)`, where `c` is a per-substance cooling
//! constant. Constants are fitted from measured samples ([`calibrate`]) and
//! then integrated with fixed-step forward Euler ([`simulate`]).
//!
//! A creamed run branches off the black-coffee run at a chosen grid index:
//! the temperature drops instantly by the cream delta, and the remainder of
//! the run is re-integrated with the cream constant.

mod calibrate;
mod constants;
mod events;
mod grid;
mod parameters;
mod results;
mod sample_table;
mod series;
mod simulate;
mod trajectory;

#[cfg(test)]
mod test_support;

pub use calibrate::{CalibrationConfig, CalibrationError};
pub use constants::{CoolingConstant, CoolingConstants, Substance};
pub use events::{CreamEvent, CreamEventKind};
pub use parameters::{CreamSpacing, SimulationParameters};
pub use results::{Crossing, SimulationResults};
pub use sample_table::{SampleRow, SampleTable};
pub use series::{PlotSeries, SeriesRole, plot_series};
pub use simulate::{SimulationError, ValidationWarning};
pub use trajectory::{CreamedTrajectory, Sample, Trajectory};

pub(crate) use calibrate::calibrate;
pub(crate) use simulate::simulate;
