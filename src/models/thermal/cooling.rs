//! Coffee cooling models.
//!
//! This module provides [`twine_core::Model`] implementations for fitting
//! cooling constants and simulating a cup of coffee as it cools, with cream
//! added at chosen moments. The computational core is in the internal
//! [`core`] module.
//!
//! Three adapters share that core:
//!
//! - [`Calibrator`] fits [`CoolingConstants`] to a [`SampleTable`].
//! - [`CoolingSimulator`] runs a [`SimulationParameters`] scenario with fixed constants.
//! - [`CoffeeCooling`] does both and also lays out the chart series.

pub(crate) mod core;

pub use self::core::{
    CalibrationConfig, CalibrationError, CoolingConstant, CoolingConstants, CreamEvent,
    CreamEventKind, CreamSpacing, CreamedTrajectory, Crossing, PlotSeries, Sample, SampleRow,
    SampleTable, SeriesRole, SimulationError, SimulationParameters, SimulationResults, Substance,
    Trajectory, ValidationWarning, plot_series,
};

use thiserror::Error;
use twine_core::Model;

/// Fits cooling constants to measured samples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Calibrator {
    pub config: CalibrationConfig,
}

impl Calibrator {
    #[must_use]
    pub fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }
}

impl Model for Calibrator {
    type Input = SampleTable;
    type Output = CoolingConstants;
    type Error = CalibrationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::calibrate(input, &self.config)
    }
}

/// Simulates black and creamed coffee with known cooling constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingSimulator {
    pub constants: CoolingConstants,
}

impl CoolingSimulator {
    #[must_use]
    pub fn new(constants: CoolingConstants) -> Self {
        Self { constants }
    }
}

impl Model for CoolingSimulator {
    type Input = SimulationParameters;
    type Output = SimulationResults;
    type Error = SimulationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::simulate(input, &self.constants)
    }
}

/// Calibrates against a sample table, then simulates.
///
/// The default uses the built-in measurements and a 20 °C reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoffeeCooling {
    pub table: SampleTable,
    pub calibration: CalibrationConfig,
}

impl CoffeeCooling {
    #[must_use]
    pub fn new(table: SampleTable, calibration: CalibrationConfig) -> Self {
        Self { table, calibration }
    }
}

/// Everything produced by a [`CoffeeCooling`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeCoolingReport {
    pub constants: CoolingConstants,
    pub results: SimulationResults,

    /// Measured and simulated series in chart order.
    pub series: Vec<PlotSeries>,
}

/// Errors from a [`CoffeeCooling`] run.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoffeeCoolingError {
    #[error("calibration failed: {0}")]
    Calibration(#[from] CalibrationError),

    #[error("simulation failed: {0}")]
    Simulation(#[from] SimulationError),
}

impl Model for CoffeeCooling {
    type Input = SimulationParameters;
    type Output = CoffeeCoolingReport;
    type Error = CoffeeCoolingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let constants = core::calibrate(&self.table, &self.calibration)?;
        let results = core::simulate(input, &constants)?;
        let series = plot_series(&self.table, &results);

        Ok(CoffeeCoolingReport {
            constants,
            results,
            series,
        })
    }
}
