//! The simulator module provides the mechanics to repeat trials of an
//! experiment and aggregate their outcomes.  Every driver threads its
//! aggregate explicitly through the run.  Nothing accumulates in
//! process-wide state, so each experiment can be exercised in isolation.
//!
//! `Simulation` and `WebExperiments` are used for Rust- and npm-based
//! callers, respectively.  The `Simulation` methods return the associated
//! Rust types directly, while `WebExperiments` wraps them in a JS/WASM
//! friendly interface.

use std::convert::TryFrom;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::experiments::Trial;
use crate::input_modeling::UniformRng;
use crate::output_analysis::RunningAggregate;
use crate::utils::errors::ExperimentError;
use crate::utils::set_panic_hook;

pub mod services;
pub mod web;

pub use self::services::Services;
pub use self::web::WebExperiments;

/// Most running ratios reserved before a run starts.
const MAX_RESERVED_RATIOS: u64 = 1 << 16;

/// The `Simulation` struct owns everything a run needs: the random number
/// generator and the trial counter.  Experiments are passed in per call, so
/// one simulation can drive several experiments from a single seed.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    services: Services,
}

/// The running success ratio after every trial of a run, in trial order,
/// along with the final aggregate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioSeries {
    ratios: Vec<f64>,
    aggregate: RunningAggregate,
}

impl RatioSeries {
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    pub fn aggregate(&self) -> RunningAggregate {
        self.aggregate
    }

    /// The ratio after the last trial, `None` for an empty run.
    pub fn final_ratio(&self) -> Option<f64> {
        self.ratios.last().copied()
    }

    /// (trial number, running ratio) pairs, with trial numbers from 1.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.ratios
            .iter()
            .enumerate()
            .map(|(index, ratio)| ((index + 1) as f64, *ratio))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

impl Simulation {
    /// This constructor method creates a simulation from an optional seed.
    /// Without a seed the generator is seeded from operating system entropy.
    pub fn post(seed: Option<u64>) -> Self {
        set_panic_hook();
        Self {
            services: Services::new(UniformRng::from_optional_seed(seed)),
        }
    }

    /// A deterministic simulation, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::post(Some(seed))
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn uniform_rng(&mut self) -> &mut UniformRng {
        self.services.uniform_rng()
    }

    /// Execute a single trial of `experiment`.
    pub fn trial<T: Trial>(&mut self, experiment: &T) -> Result<T::Outcome, ExperimentError> {
        let outcome = experiment.trial(self.services.uniform_rng())?;
        self.services.count_trial();
        Ok(outcome)
    }

    /// Execute `trials` trials of `experiment`, folding each outcome into an
    /// accumulator as it is produced.  Outcomes are never retained.
    pub fn fold_trials<T, A, F>(
        &mut self,
        experiment: &T,
        trials: u64,
        init: A,
        mut fold: F,
    ) -> Result<A, ExperimentError>
    where
        T: Trial,
        F: FnMut(A, T::Outcome) -> A,
    {
        debug!(trials, "running trials");
        let mut accumulator = init;
        for _ in 0..trials {
            let outcome = self.trial(experiment)?;
            accumulator = fold(accumulator, outcome);
        }
        debug!(total = self.services.trials_run(), "trials complete");
        Ok(accumulator)
    }

    /// Execute `trials` trials of a success/failure experiment, recording
    /// the running success ratio after each one.  Zero trials produce an
    /// empty series.
    pub fn running_ratios<T>(
        &mut self,
        experiment: &T,
        trials: u64,
    ) -> Result<RatioSeries, ExperimentError>
    where
        T: Trial<Outcome = bool>,
    {
        // Up-front reservation is capped; longer runs grow the series on demand
        let capacity = usize::try_from(trials.min(MAX_RESERVED_RATIOS)).unwrap_or(0);
        self.fold_trials(
            experiment,
            trials,
            RatioSeries {
                ratios: Vec::with_capacity(capacity),
                aggregate: RunningAggregate::default(),
            },
            |mut series, success| {
                series.aggregate.record(success);
                if let Some(ratio) = series.aggregate.ratio() {
                    series.ratios.push(ratio);
                }
                series
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Succeeds on every `period`-th trial, without touching the generator
    #[derive(Default)]
    struct Periodic {
        period: u64,
        calls: std::cell::Cell<u64>,
    }

    impl Trial for Periodic {
        type Outcome = bool;

        fn trial(&self, _uniform_rng: &mut UniformRng) -> Result<bool, ExperimentError> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            Ok(call % self.period == 0)
        }
    }

    #[test]
    fn zero_trials_yield_an_empty_series() {
        let mut simulation = Simulation::seeded(1);
        let experiment = Periodic {
            period: 2,
            ..Periodic::default()
        };
        let series = simulation.running_ratios(&experiment, 0).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.final_ratio(), None);
        assert_eq!(series.aggregate().trials(), 0);
    }

    #[test]
    fn running_ratios_are_prefix_cumulative() {
        let mut simulation = Simulation::seeded(1);
        let experiment = Periodic {
            period: 2,
            ..Periodic::default()
        };
        let series = simulation.running_ratios(&experiment, 4).unwrap();
        assert_eq!(series.ratios(), &[0.0, 0.5, 1.0 / 3.0, 0.5]);
        assert_eq!(
            series.points(),
            vec![(1.0, 0.0), (2.0, 0.5), (3.0, 1.0 / 3.0), (4.0, 0.5)]
        );
        assert_eq!(simulation.services().trials_run(), 4);
    }

    /// Fails on its first trial
    struct Broken;

    impl Trial for Broken {
        type Outcome = bool;

        fn trial(&self, _uniform_rng: &mut UniformRng) -> Result<bool, ExperimentError> {
            Err(ExperimentError::InvalidGameState)
        }
    }

    #[test]
    fn huge_trial_counts_do_not_reserve_up_front() {
        let mut simulation = Simulation::seeded(1);
        assert!(matches!(
            simulation.running_ratios(&Broken, i64::MAX as u64),
            Err(ExperimentError::InvalidGameState)
        ));
        assert!(matches!(
            simulation.running_ratios(&Broken, u64::MAX),
            Err(ExperimentError::InvalidGameState)
        ));
        assert_eq!(simulation.services().trials_run(), 0);
    }

    #[test]
    fn fold_trials_sees_every_outcome() {
        let mut simulation = Simulation::seeded(1);
        let experiment = Periodic {
            period: 3,
            ..Periodic::default()
        };
        let successes = simulation
            .fold_trials(&experiment, 9, 0u64, |count, success| count + success as u64)
            .unwrap();
        assert_eq!(successes, 3);
    }
}
