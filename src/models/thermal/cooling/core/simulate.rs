//! Fixed-step integration of the black and creamed runs.
//!
//! Both runs use the explicit forward-Euler update
//!
//! ```text
//! T_{n+1} = T_n - c * (T_n - T_eq) * dt
//! ```
//!
//! with the black constant for the baseline and the cream constant after a
//! cream event. Accuracy is controlled entirely by the caller's time step.

mod error;
mod warning;

pub use error::SimulationError;
pub use warning::ValidationWarning;

use tracing::{info, info_span, warn};
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use crate::support::units::TemperatureDifference;

use super::{
    CoolingConstants, CreamEvent, CreamEventKind, CreamedTrajectory, Crossing, Sample,
    SimulationParameters, SimulationResults, Trajectory, events::sampled_events, grid::TimeGrid,
};

/// Runs the black baseline and every creamed branch.
///
/// # Errors
///
/// Returns a [`SimulationError`] if the parameters are invalid or a cream
/// event cannot be placed on the simulation grid.
pub(crate) fn simulate(
    params: &SimulationParameters,
    constants: &CoolingConstants,
) -> Result<SimulationResults, SimulationError> {
    let grid = params.grid()?;
    let sampled = sampled_events(params, &grid)?;

    let span = info_span!(
        "cooling.simulate",
        steps = grid.len(),
        cream_events = tracing::field::Empty,
    );
    let _guard = span.enter();

    let warnings = warning::check(params, constants);
    for warning in &warnings {
        warn!(%warning, "questionable simulation setup");
    }

    let equilibrium = params.equilibrium_temperature;
    let start = Sample {
        time: grid.time_at(0),
        temperature: params.initial_temperature,
    };
    let black = integrate(
        start,
        &grid,
        0,
        equilibrium,
        constants.black.decay_over(grid.step()),
    );

    let crossing = params.preferred_temperature.and_then(|preferred| {
        find_crossing(&black, preferred, params.cream_temperature_delta)
    });

    let mut events = Vec::with_capacity(sampled.len() + 1);
    if let Some(crossing) = &crossing {
        info!(
            preferred_c = crossing.preferred.get::<degree_celsius>(),
            current_c = crossing.before.get::<degree_celsius>(),
            creamed_c = crossing.after.get::<degree_celsius>(),
            minutes = crossing.time.get::<minute>(),
            "add cream"
        );
        events.push(CreamEvent {
            time: crossing.time,
            index: crossing.index,
            kind: CreamEventKind::Recommended,
        });
    }
    events.extend(sampled);
    span.record("cream_events", events.len());

    let cream_decay = constants.cream.decay_over(grid.step());
    let creamed = events
        .into_iter()
        .map(|event| {
            branch(
                &black,
                event,
                &grid,
                params.cream_temperature_delta,
                equilibrium,
                cream_decay,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SimulationResults {
        black,
        crossing,
        creamed,
        warnings,
    })
}

/// One forward-Euler step of `dT/dt = -c (T - T_eq)`, where `decay = c * dt`.
fn euler_step(
    temperature: ThermodynamicTemperature,
    equilibrium: ThermodynamicTemperature,
    decay: f64,
) -> ThermodynamicTemperature {
    temperature - temperature.minus(equilibrium) * decay
}

/// Integrates from `first`, placed at grid index `from`, to the end of the grid.
fn integrate(
    first: Sample,
    grid: &TimeGrid,
    from: usize,
    equilibrium: ThermodynamicTemperature,
    decay: f64,
) -> Trajectory {
    let mut samples = Vec::with_capacity(grid.len().saturating_sub(from));
    samples.push(first);

    let mut temperature = first.temperature;
    for index in (from + 1)..grid.len() {
        temperature = euler_step(temperature, equilibrium, decay);
        samples.push(Sample {
            time: grid.time_at(index),
            temperature,
        });
    }

    Trajectory::from_samples(samples)
}

/// Scans forward for the first sample where adding cream reaches the
/// preferred temperature.
fn find_crossing(
    black: &Trajectory,
    preferred: ThermodynamicTemperature,
    delta: TemperatureInterval,
) -> Option<Crossing> {
    black
        .samples()
        .iter()
        .enumerate()
        .find(|(_, sample)| sample.temperature + delta <= preferred)
        .map(|(index, sample)| Crossing {
            time: sample.time,
            index,
            preferred,
            before: sample.temperature,
            after: sample.temperature + delta,
        })
}

/// Adds cream at the event and re-integrates the rest of the run.
fn branch(
    black: &Trajectory,
    event: CreamEvent,
    grid: &TimeGrid,
    delta: TemperatureInterval,
    equilibrium: ThermodynamicTemperature,
    decay: f64,
) -> Result<CreamedTrajectory, SimulationError> {
    let branch = *black
        .at(event.index)
        .ok_or(SimulationError::EventOutOfRange { time: event.time })?;

    let creamed = Sample {
        time: branch.time,
        temperature: branch.temperature + delta,
    };

    Ok(CreamedTrajectory {
        event,
        branch,
        trajectory: integrate(creamed, grid, event.index, equilibrium, decay),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::cooling::core::{
        CalibrationConfig, CreamSpacing, SampleTable, Substance, calibrate,
        test_support::{celsius, constants, delta_c, minutes},
    };

    fn reference_constants() -> CoolingConstants {
        calibrate(&SampleTable::default(), &CalibrationConfig::default())
            .expect("default table should calibrate")
    }

    fn short_run() -> SimulationParameters {
        SimulationParameters {
            end_time: minutes(10.0),
            time_step: minutes(0.5),
            initial_temperature: celsius(80.0),
            preferred_temperature: None,
            cream_sample_count: 2,
            ..SimulationParameters::default()
        }
    }

    #[test]
    fn reference_scenario() {
        let params = SimulationParameters::default();
        let results = simulate(&params, &reference_constants()).expect("reference should run");

        assert_eq!(results.black.len(), 40_000);
        let first = results.black.first().expect("non-empty");
        assert_eq!(first.temperature, params.initial_temperature);
        assert_relative_eq!(
            results.black.last().unwrap().temperature.get::<degree_celsius>(),
            46.167_399_534_134_69,
            epsilon = 1e-6
        );

        let crossing = results.crossing.expect("black coffee should cool to 80 °C");
        assert_eq!(crossing.index, 6267);
        assert_relative_eq!(crossing.time.get::<minute>(), 6.267, epsilon = 1e-9);
        assert!(crossing.time < minutes(20.0));
        assert!(crossing.after <= celsius(75.0));
        assert_eq!(crossing.after, crossing.before + params.cream_temperature_delta);

        // The step before the crossing was still too hot.
        let previous = results.black.at(crossing.index - 1).unwrap();
        assert!(previous.temperature + params.cream_temperature_delta > celsius(75.0));

        assert_eq!(results.creamed.len(), 1 + params.cream_sample_count);
        let recommended = results.recommended().expect("recommended run");
        assert_eq!(results.creamed[0], *recommended);
        assert_eq!(recommended.event.index, crossing.index);
        assert_eq!(
            recommended.trajectory.first().unwrap().temperature,
            crossing.before + params.cream_temperature_delta
        );
        assert_eq!(recommended.trajectory.len(), 40_000 - crossing.index);
        assert_eq!(results.sampled().count(), params.cream_sample_count);
        assert!(results.warnings.is_empty());
    }

    #[test]
    fn creamed_run_uses_cream_constant() {
        let params = SimulationParameters {
            cream_spacing: CreamSpacing::At(vec![minutes(2.0)]),
            ..short_run()
        };
        let constants = constants(0.1, 0.05);

        let results = simulate(&params, &constants).expect("run should succeed");

        let run = &results.creamed[0];
        assert_eq!(run.event.index, 4);
        assert_eq!(run.branch, *results.black.at(4).unwrap());

        let creamed = run.branch.temperature + params.cream_temperature_delta;
        let samples = run.trajectory.samples();
        assert_eq!(samples[0].temperature, creamed);
        assert_eq!(samples[0].time, run.branch.time);

        // One cream-constant step: 5% per minute over half a minute.
        let expected = creamed.get::<degree_celsius>()
            - 0.05 * 0.5 * (creamed.get::<degree_celsius>() - 20.0);
        assert_relative_eq!(
            samples[1].temperature.get::<degree_celsius>(),
            expected,
            epsilon = 1e-9
        );
        assert_eq!(samples[1].time, results.black.at(5).unwrap().time);

        // The creamed run is re-integrated rather than copied from the baseline.
        assert_ne!(samples[1].temperature, results.black.at(5).unwrap().temperature);

        let plotted: Vec<_> = run.plot_samples().collect();
        assert_eq!(plotted.len(), run.trajectory.len() + 1);
        assert_eq!(plotted[0], run.branch);
        assert_eq!(plotted[0].time, plotted[1].time);
    }

    #[test]
    fn no_preferred_temperature_means_no_recommendation() {
        let results = simulate(&short_run(), &constants(0.1, 0.05)).expect("run should succeed");

        assert!(results.crossing.is_none());
        assert!(results.recommended().is_none());
        assert_eq!(results.creamed.len(), 2);
    }

    #[test]
    fn zero_samples() {
        let without_preferred = SimulationParameters {
            cream_sample_count: 0,
            ..short_run()
        };
        let results =
            simulate(&without_preferred, &constants(0.1, 0.05)).expect("run should succeed");
        assert!(results.creamed.is_empty());

        let with_preferred = SimulationParameters {
            preferred_temperature: Some(celsius(70.0)),
            ..without_preferred
        };
        let results =
            simulate(&with_preferred, &constants(0.1, 0.05)).expect("run should succeed");
        assert_eq!(results.creamed.len(), 1);
        assert_eq!(results.creamed[0].event.kind, CreamEventKind::Recommended);
    }

    #[test]
    fn preferred_temperature_never_reached() {
        let params = SimulationParameters {
            preferred_temperature: Some(celsius(10.0)),
            ..short_run()
        };

        let results = simulate(&params, &constants(0.1, 0.05)).expect("run should succeed");

        assert!(results.crossing.is_none());
        assert_eq!(results.creamed.len(), 2);
    }

    #[test]
    fn already_cool_enough_at_start() {
        let params = SimulationParameters {
            preferred_temperature: Some(celsius(90.0)),
            ..short_run()
        };

        let results = simulate(&params, &constants(0.1, 0.05)).expect("run should succeed");

        let crossing = results.crossing.expect("start qualifies");
        assert_eq!(crossing.index, 0);
        assert_eq!(crossing.time, params.start_time);
    }

    #[test]
    fn earliest_crossing_wins_on_flat_run() {
        // At equilibrium every step ties; the first one is chosen.
        let params = SimulationParameters {
            initial_temperature: celsius(20.0),
            preferred_temperature: Some(celsius(19.0)),
            cream_temperature_delta: delta_c(-2.0),
            ..short_run()
        };

        let results = simulate(&params, &constants(0.1, 0.05)).expect("run should succeed");

        assert_eq!(results.crossing.map(|c| c.index), Some(0));
    }

    #[test]
    fn warns_about_equilibrium_mismatch() {
        let params = SimulationParameters {
            equilibrium_temperature: celsius(25.0),
            ..short_run()
        };

        let results = simulate(&params, &constants(0.1, 0.05)).expect("run should succeed");

        assert_eq!(
            results.warnings,
            vec![ValidationWarning::EquilibriumMismatch {
                reference: celsius(20.0),
                equilibrium: celsius(25.0),
            }]
        );
    }

    #[test]
    fn warns_about_coarse_steps() {
        // 3 per minute over half a minute sheds 150% per step.
        let results = simulate(&short_run(), &constants(3.0, 0.05)).expect("run should succeed");

        assert_eq!(results.warnings.len(), 1);
        assert!(matches!(
            results.warnings[0],
            ValidationWarning::CoarseTimeStep {
                substance: Substance::Black,
                ..
            }
        ));
    }

    #[test]
    fn tiny_time_step_is_rejected() {
        let params = SimulationParameters {
            time_step: minutes(1e-300),
            ..SimulationParameters::default()
        };

        for params in [
            params.clone(),
            SimulationParameters {
                preferred_temperature: None,
                cream_sample_count: 0,
                ..params
            },
        ] {
            assert!(matches!(
                simulate(&params, &constants(0.02, 0.01)),
                Err(SimulationError::TooManySteps { .. })
            ));
        }
    }

    #[test]
    fn invalid_parameters_fail_before_integration() {
        let params = SimulationParameters {
            time_step: minutes(0.0),
            ..short_run()
        };
        assert!(matches!(
            simulate(&params, &constants(0.1, 0.05)),
            Err(SimulationError::InvalidTimeStep(_))
        ));

        let params = SimulationParameters {
            cream_spacing: CreamSpacing::At(vec![minutes(-1.0)]),
            ..short_run()
        };
        assert!(matches!(
            simulate(&params, &constants(0.1, 0.05)),
            Err(SimulationError::EventOutOfRange { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;

    use proptest::prelude::*;

    use crate::models::thermal::cooling::core::test_support::{celsius, constants, delta_c, minutes};

    fn params(
        initial: f64,
        equilibrium: f64,
        step: f64,
        cream_delta: f64,
        samples: usize,
    ) -> SimulationParameters {
        SimulationParameters {
            start_time: minutes(0.0),
            end_time: minutes(10.0),
            time_step: minutes(step),
            initial_temperature: celsius(initial),
            equilibrium_temperature: celsius(equilibrium),
            preferred_temperature: Some(celsius(equilibrium + 0.5 * (initial - equilibrium))),
            cream_temperature_delta: delta_c(cream_delta),
            cream_sample_count: samples,
            ..SimulationParameters::default()
        }
    }

    proptest! {
        #[test]
        fn equilibrium_start_is_a_fixed_point(
            temperature in -10.0_f64..100.0,
            c in 0.001_f64..1.0,
            step in 0.01_f64..0.5,
        ) {
            let params = SimulationParameters {
                preferred_temperature: None,
                cream_sample_count: 0,
                ..params(temperature, temperature, step, -5.0, 0)
            };
            let results = simulate(&params, &constants(c, c)).unwrap();

            for sample in results.black.samples() {
                prop_assert_eq!(sample.temperature, params.initial_temperature);
            }
        }

        #[test]
        fn black_run_decays_monotonically(
            initial in 40.0_f64..100.0,
            equilibrium in 0.0_f64..30.0,
            c in 0.001_f64..1.0,
            step in 0.01_f64..0.5,
        ) {
            let params = params(initial, equilibrium, step, -5.0, 0);
            let results = simulate(&params, &constants(c, c)).unwrap();

            let temperatures: Vec<_> = results.black.temperatures().collect();
            for pair in temperatures.windows(2) {
                prop_assert!(pair[1] <= pair[0]);
            }

            let first_gap = temperatures[0].minus(params.equilibrium_temperature);
            let last_gap = temperatures[temperatures.len() - 1].minus(params.equilibrium_temperature);
            prop_assert!(last_gap < first_gap);
        }

        #[test]
        fn repeated_runs_are_identical(
            initial in 40.0_f64..100.0,
            c_black in 0.001_f64..1.0,
            c_cream in 0.001_f64..1.0,
            step in 0.01_f64..0.5,
            samples in 0_usize..6,
        ) {
            let params = params(initial, 20.0, step, -5.0, samples);
            let constants = constants(c_black, c_cream);

            let first = simulate(&params, &constants).unwrap();
            let second = simulate(&params, &constants).unwrap();

            prop_assert_eq!(first, second);
        }

        #[test]
        fn creamed_runs_start_from_the_branch(
            initial in 40.0_f64..100.0,
            cream_delta in -15.0_f64..0.0,
            c_black in 0.001_f64..1.0,
            c_cream in 0.001_f64..1.0,
            step in 0.01_f64..0.5,
            samples in 0_usize..6,
        ) {
            let params = params(initial, 20.0, step, cream_delta, samples);
            let results = simulate(&params, &constants(c_black, c_cream)).unwrap();

            for run in &results.creamed {
                let at_branch = *results.black.at(run.event.index).unwrap();
                prop_assert_eq!(run.branch, at_branch);
                prop_assert_eq!(run.event.time, at_branch.time);

                let first = run.trajectory.first().unwrap();
                prop_assert_eq!(first.time, at_branch.time);
                prop_assert_eq!(first.temperature, at_branch.temperature + params.cream_temperature_delta);
                prop_assert_eq!(run.trajectory.len(), results.black.len() - run.event.index);
            }
        }
    }
}
