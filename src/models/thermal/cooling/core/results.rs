//! Results of a cooling simulation.

use std::fmt;

use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use super::{CreamEvent, CreamEventKind, CreamedTrajectory, Trajectory, ValidationWarning};

/// The moment the black coffee, once creamed, reaches the preferred temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Time of the first qualifying step.
    pub time: Time,

    /// Index of that step in the black-coffee trajectory.
    pub index: usize,

    /// The drinker's preferred temperature.
    pub preferred: ThermodynamicTemperature,

    /// Black-coffee temperature at the crossing.
    pub before: ThermodynamicTemperature,

    /// Temperature right after the cream goes in.
    pub after: ThermodynamicTemperature,
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.time.get::<minute>();
        let whole = minutes.trunc();
        let seconds = ((minutes - whole) * 60.0).trunc();
        write!(
            f,
            "add cream at {whole:.0} min {seconds:.0} s ({minutes:.3} min): \
             {:.3} °C becomes {:.3} °C, preferred {:.3} °C",
            self.before.get::<degree_celsius>(),
            self.after.get::<degree_celsius>(),
            self.preferred.get::<degree_celsius>(),
        )
    }
}

/// Black-coffee baseline plus one creamed run per cream event.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResults {
    /// The uncreamed baseline.
    pub black: Trajectory,

    /// The preferred-temperature crossing, if one was requested and reached.
    pub crossing: Option<Crossing>,

    /// Creamed runs in event order; the recommended run, if any, comes first.
    pub creamed: Vec<CreamedTrajectory>,

    /// Non-fatal problems with the setup.
    pub warnings: Vec<ValidationWarning>,
}

impl SimulationResults {
    /// The simulated cream events, in order.
    pub fn events(&self) -> impl Iterator<Item = CreamEvent> + '_ {
        self.creamed.iter().map(|run| run.event)
    }

    /// The run creamed at the preferred-temperature crossing.
    #[must_use]
    pub fn recommended(&self) -> Option<&CreamedTrajectory> {
        self.creamed
            .iter()
            .find(|run| run.event.kind == CreamEventKind::Recommended)
    }

    /// The runs creamed at the sampled times.
    pub fn sampled(&self) -> impl Iterator<Item = &CreamedTrajectory> + '_ {
        self.creamed
            .iter()
            .filter(|run| run.event.kind == CreamEventKind::Sampled)
    }
}
