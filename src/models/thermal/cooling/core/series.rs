//! Series handed to a chart renderer.
//!
//! Rendering itself lives outside this crate. A renderer receives one
//! [`PlotSeries`] per line and picks colors and labels from its role.

use uom::si::f64::{ThermodynamicTemperature, Time};

use super::{CreamEventKind, Sample, SampleTable, SimulationResults, Substance};

/// What a plotted series represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesRole {
    /// Measured black-coffee samples.
    SampleBlack,
    /// Measured creamed-coffee samples.
    SampleCream,
    /// Simulated black coffee.
    Black,
    /// Simulated coffee creamed at the preferred-temperature crossing.
    Recommended,
    /// Simulated coffee creamed at a sampled time.
    CreamAdded,
}

/// One line on a cooling chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub role: SeriesRole,
    pub samples: Vec<Sample>,
}

impl PlotSeries {
    pub fn times(&self) -> impl Iterator<Item = Time> + '_ {
        self.samples.iter().map(|sample| sample.time)
    }

    pub fn temperatures(&self) -> impl Iterator<Item = ThermodynamicTemperature> + '_ {
        self.samples.iter().map(|sample| sample.temperature)
    }
}

/// Lays out the measured and simulated series in chart order.
///
/// The order is: black samples, cream samples, simulated black coffee, the
/// recommended creamed run (if any), then the sampled creamed runs. Creamed
/// runs include their branch sample so the cream drop is drawn.
#[must_use]
pub fn plot_series(table: &SampleTable, results: &SimulationResults) -> Vec<PlotSeries> {
    let mut series = Vec::with_capacity(3 + results.creamed.len());

    series.push(PlotSeries {
        role: SeriesRole::SampleBlack,
        samples: table.samples(Substance::Black).collect(),
    });
    series.push(PlotSeries {
        role: SeriesRole::SampleCream,
        samples: table.samples(Substance::Cream).collect(),
    });
    series.push(PlotSeries {
        role: SeriesRole::Black,
        samples: results.black.samples().to_vec(),
    });

    series.extend(results.creamed.iter().map(|run| PlotSeries {
        role: match run.event.kind {
            CreamEventKind::Recommended => SeriesRole::Recommended,
            CreamEventKind::Sampled => SeriesRole::CreamAdded,
        },
        samples: run.plot_samples().collect(),
    }));

    series
}
