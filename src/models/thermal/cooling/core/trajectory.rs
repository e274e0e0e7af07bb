//! Time/temperature series produced by the simulator.

use std::iter;

use uom::si::f64::{ThermodynamicTemperature, Time};

use super::CreamEvent;

/// A single temperature reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: Time,
    pub temperature: ThermodynamicTemperature,
}

/// An ordered run of samples.
///
/// Trajectories are produced once by the simulator and never modified.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    pub(crate) fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn times(&self) -> impl Iterator<Item = Time> + '_ {
        self.samples.iter().map(|sample| sample.time)
    }

    pub fn temperatures(&self) -> impl Iterator<Item = ThermodynamicTemperature> + '_ {
        self.samples.iter().map(|sample| sample.temperature)
    }

    /// The sample at `index`, if any.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A run that branches off the black coffee when cream is added.
#[derive(Debug, Clone, PartialEq)]
pub struct CreamedTrajectory {
    /// When the cream goes in.
    pub event: CreamEvent,

    /// The black-coffee sample at the branch point, just before the cream.
    pub branch: Sample,

    /// The creamed run, starting with the branch temperature plus the cream delta.
    pub trajectory: Trajectory,
}

impl CreamedTrajectory {
    /// The branch sample followed by the creamed run.
    ///
    /// The first two samples share a time, which draws the instant drop
    /// when the cream is poured.
    pub fn plot_samples(&self) -> impl Iterator<Item = Sample> + '_ {
        iter::once(self.branch).chain(self.trajectory.samples().iter().copied())
    }
}
