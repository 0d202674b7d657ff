//! Card draw experiment: shuffle a standard deck and check whether the first
//! card of a target rank lands at a target position.  Suits are irrelevant,
//! so the deck is the multiset of ranks 1 to 13, four copies each.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::Trial;
use crate::input_modeling::{shuffle, UniformRng};
use crate::output_analysis::ConfidenceInterval;
use crate::simulator::{RatioSeries, Simulation};
use crate::utils::errors::ExperimentError;

pub const RANKS: u8 = 13;
pub const COPIES_PER_RANK: usize = 4;
pub const DECK_SIZE: usize = RANKS as usize * COPIES_PER_RANK;

/// Default experiment: the first 2 is the 14th card (zero-indexed 13).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDraw {
    target_rank: u8,
    target_position: usize,
}

impl Default for CardDraw {
    fn default() -> Self {
        Self {
            target_rank: 2,
            target_position: 13,
        }
    }
}

impl CardDraw {
    pub fn new(target_rank: u8, target_position: usize) -> Result<Self, ExperimentError> {
        if !(1..=RANKS).contains(&target_rank) {
            return Err(ExperimentError::TargetNotInDeck(target_rank));
        }
        if target_position >= DECK_SIZE {
            return Err(ExperimentError::PositionOutOfDeck(target_position));
        }
        Ok(Self {
            target_rank,
            target_position,
        })
    }

    pub fn target_rank(&self) -> u8 {
        self.target_rank
    }

    pub fn target_position(&self) -> usize {
        self.target_position
    }

    /// An unshuffled deck, ranks in ascending order.
    pub fn fresh_deck() -> Vec<u8> {
        (1..=RANKS)
            .flat_map(|rank| std::iter::repeat(rank).take(COPIES_PER_RANK))
            .collect()
    }

    /// Index of the first card of `rank` in `deck`.
    pub fn first_position(deck: &[u8], rank: u8) -> Option<usize> {
        deck.iter().position(|card| *card == rank)
    }

    /// Analytic probability of the event: every card before the target
    /// position avoids the rank, and the card at it matches.
    pub fn exact_probability(&self) -> f64 {
        let others = DECK_SIZE - COPIES_PER_RANK;
        if self.target_position > others {
            return 0.0;
        }
        let misses = (0..self.target_position).fold(1.0, |acc, drawn| {
            acc * (others - drawn) as f64 / (DECK_SIZE - drawn) as f64
        });
        misses * COPIES_PER_RANK as f64 / (DECK_SIZE - self.target_position) as f64
    }
}

impl Trial for CardDraw {
    type Outcome = bool;

    fn trial(&self, uniform_rng: &mut UniformRng) -> Result<bool, ExperimentError> {
        let mut deck = Self::fresh_deck();
        shuffle(&mut deck, uniform_rng);
        let first = Self::first_position(&deck, self.target_rank)
            .ok_or(ExperimentError::TargetNotInDeck(self.target_rank))?;
        Ok(first == self.target_position)
    }
}

/// Result of a card draw run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDrawSummary {
    experiment: CardDraw,
    trials: u64,
    successes: u64,
    final_ratio: Option<f64>,
    exact_probability: f64,
    confidence_interval: Option<ConfidenceInterval<f64>>,
}

impl CardDrawSummary {
    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn final_ratio(&self) -> Option<f64> {
        self.final_ratio
    }

    pub fn exact_probability(&self) -> f64 {
        self.exact_probability
    }

    /// 95% confidence interval on the success probability, `None` for an
    /// empty run.
    pub fn confidence_interval(&self) -> Option<ConfidenceInterval<f64>> {
        self.confidence_interval
    }
}

/// A card draw run: the running-ratio series for plotting and its summary.
#[derive(Debug, Clone)]
pub struct CardDrawRun {
    pub series: RatioSeries,
    pub summary: CardDrawSummary,
}

/// Run `trials` card draws and report the running success ratio after each.
pub fn simulate(
    simulation: &mut Simulation,
    experiment: &CardDraw,
    trials: u64,
) -> Result<CardDrawRun, ExperimentError> {
    let series = simulation.running_ratios(experiment, trials)?;
    let aggregate = series.aggregate();
    let confidence_interval = match aggregate.proportion() {
        Ok(proportion) => Some(proportion.confidence_interval_mean(0.05)?),
        Err(ExperimentError::EmptySample) => None,
        Err(err) => return Err(err),
    };
    let summary = CardDrawSummary {
        experiment: experiment.clone(),
        trials: aggregate.trials(),
        successes: aggregate.successes(),
        final_ratio: series.final_ratio(),
        exact_probability: experiment.exact_probability(),
        confidence_interval,
    };
    info!(
        trials = summary.trials,
        successes = summary.successes,
        "card draw run complete"
    );
    Ok(CardDrawRun { series, summary })
}
