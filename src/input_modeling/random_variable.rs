//! Random variables drive every randomized experiment.  The experiments
//! only need uniform behavior: a fair die face, a uniformly chosen door, or
//! a uniformly random permutation of a deck.  These are wrapped in enums
//! `Discrete` and `Index`, parameterized like the rest of the crate's
//! configuration.

use rand::distributions::Distribution;
use rand::seq::SliceRandom;
use rand_distr::Uniform;
use serde::{Deserialize, Serialize};

use super::UniformRng;
use crate::utils::errors::ExperimentError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Discrete {
    /// Range is inclusive of min, exclusive of max: [min, max)
    Uniform { min: u64, max: u64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Index {
    /// Range is inclusive of min, exclusive of max: [min, max)
    Uniform { min: usize, max: usize },
}

impl Discrete {
    /// The generation of random variates drives stochastic behaviors during
    /// experiment execution.  This function requires the random number
    /// generator of the simulation, and produces a u64 random variate.
    pub fn random_variate(&self, uniform_rng: &mut UniformRng) -> Result<u64, ExperimentError> {
        match self {
            Discrete::Uniform { min, max } => {
                if min >= max {
                    return Err(ExperimentError::EmptyRange);
                }
                Ok(Uniform::new(*min, *max).sample(uniform_rng.rng()))
            }
        }
    }
}

impl Index {
    /// The generation of random variates drives stochastic behaviors during
    /// experiment execution.  This function requires the random number
    /// generator of the simulation, and produces a usize random variate.
    pub fn random_variate(&self, uniform_rng: &mut UniformRng) -> Result<usize, ExperimentError> {
        match self {
            Index::Uniform { min, max } => {
                if min >= max {
                    return Err(ExperimentError::EmptyRange);
                }
                Ok(Uniform::new(*min, *max).sample(uniform_rng.rng()))
            }
        }
    }
}

/// Apply a uniformly random permutation (Fisher-Yates) to `items`, in place.
pub fn shuffle<T>(items: &mut [T], uniform_rng: &mut UniformRng) {
    items.shuffle(uniform_rng.rng());
}
