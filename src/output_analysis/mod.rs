//! The output analysis module turns raw trial outcomes into probability
//! estimates.  `RunningAggregate` is the per-trial success counter the
//! drivers thread through a run, `Proportion` is the resulting estimate
//! with a confidence interval on the mean, and `chi_square` measures how
//! far a set of observed class counts sits from the expected counts.

use num_traits::Float;
use serde::{Deserialize, Serialize};

pub mod t_scores;
use crate::utils::count_to_float;
use crate::utils::errors::ExperimentError;

/// Success count and trial count of a run, updated once per trial.  Both
/// counters only ever grow, and the trial counter grows by exactly one per
/// recorded outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningAggregate {
    successes: u64,
    trials: u64,
}

impl RunningAggregate {
    pub fn record(&mut self, success: bool) {
        self.trials += 1;
        if success {
            self.successes += 1;
        }
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Successes so far divided by trials so far, `None` before the first
    /// trial.
    pub fn ratio(&self) -> Option<f64> {
        if self.trials == 0 {
            return None;
        }
        Some(self.successes as f64 / self.trials as f64)
    }

    pub fn proportion(&self) -> Result<Proportion<f64>, ExperimentError> {
        Proportion::post(self.successes, self.trials)
    }
}

/// The confidence interval provides an upper and lower estimate on a given
/// output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceInterval<T: Float> {
    lower: T,
    upper: T,
}

impl<T: Float> ConfidenceInterval<T>
where
    f64: Into<T>,
{
    pub fn lower(&self) -> T {
        self.lower
    }

    pub fn upper(&self) -> T {
        self.upper
    }

    pub fn half_width(&self) -> T {
        (self.upper - self.lower) / 2.0.into()
    }

    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// A proportion is the mean of an independent, identically-distributed
/// sample of success/failure outcomes.  Only the counts are stored, so a
/// run of millions of trials costs two integers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proportion<T> {
    successes: u64,
    trials: u64,
    mean: T,
    variance: T,
}

impl<T: Float> Proportion<T>
where
    f64: Into<T>,
{
    /// This constructor method creates a `Proportion` from a success count
    /// and a trial count.
    pub fn post(successes: u64, trials: u64) -> Result<Proportion<T>, ExperimentError> {
        if trials == 0 {
            return Err(ExperimentError::EmptySample);
        }
        if successes > trials {
            return Err(ExperimentError::InconsistentSample);
        }
        let mean = count_to_float::<T>(successes)? / count_to_float(trials)?;
        // Population variance of 0/1 points, matching sum((x - mean)^2) / n
        let variance = mean * (T::one() - mean);
        Ok(Proportion {
            successes,
            trials,
            mean,
            variance,
        })
    }

    /// Calculate the confidence interval of the mean, based on the provided
    /// value of alpha.  The interval is clamped to [0, 1].
    pub fn confidence_interval_mean(
        &self,
        alpha: T,
    ) -> Result<ConfidenceInterval<T>, ExperimentError> {
        if self.trials == 1 {
            return Ok(ConfidenceInterval {
                lower: self.mean,
                upper: self.mean,
            });
        }
        let trials: T = count_to_float(self.trials)?;
        let half_width = t_scores::t_score(alpha, (self.trials - 1) as usize)
            * self.variance.sqrt()
            / trials.sqrt();
        Ok(ConfidenceInterval {
            lower: (self.mean - half_width).max(T::zero()),
            upper: (self.mean + half_width).min(T::one()),
        })
    }

    /// Return the sample mean.
    pub fn point_estimate_mean(&self) -> T {
        self.mean
    }

    /// Return the sample variance.
    pub fn variance(&self) -> T {
        self.variance
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }
}

/// Pearson's chi-square statistic of `observed` class counts against
/// `expected` class counts.
pub fn chi_square(observed: &[u64], expected: &[f64]) -> Result<f64, ExperimentError> {
    if observed.is_empty() {
        return Err(ExperimentError::EmptySample);
    }
    if observed.len() != expected.len() || expected.iter().any(|count| *count <= 0.0) {
        return Err(ExperimentError::InconsistentSample);
    }
    Ok(observed
        .iter()
        .zip(expected.iter())
        .fold(0.0, |acc, (class_count, expected_count)| {
            let f_class_count = *class_count as f64;
            acc + (f_class_count - expected_count).powi(2) / expected_count
        }))
}

/// Chi-square statistic of `observed` against equal expected counts in
/// every class.
pub fn uniform_chi_square(observed: &[u64]) -> Result<f64, ExperimentError> {
    let total: u64 = observed.iter().sum();
    if observed.is_empty() || total == 0 {
        return Err(ExperimentError::EmptySample);
    }
    let expected_count = total as f64 / observed.len() as f64;
    chi_square(observed, &vec![expected_count; observed.len()])
}
