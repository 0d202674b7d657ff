//! The experiments module holds the four probability experiments.  The
//! birthday problem is closed-form; the card draw, the dice rolls, and the
//! Monty Hall game are randomized and implement `Trial`, so the
//! `Simulation` can repeat them and aggregate their outcomes.
//!
//! The experiments share no state with each other.  Each randomized trial
//! draws only from the generator handed to it.

use crate::input_modeling::UniformRng;
use crate::utils::errors::ExperimentError;

pub mod birthday;
pub mod card_draw;
pub mod dice;
pub mod monty_hall;

pub use self::birthday::{birthday_curve, birthday_probability, BirthdayCurve};
pub use self::card_draw::{CardDraw, CardDrawSummary};
pub use self::dice::{simulate_dice_rolls, DiceReport, DiceRoll};
pub use self::monty_hall::{Decision, Door, MontyHall, MontyHallGame, MontyHallSummary, Prize};

/// One independent execution of a randomized experiment.  The outcome is
/// generated, handed to the caller for scoring, and discarded.
pub trait Trial {
    type Outcome;

    fn trial(&self, uniform_rng: &mut UniformRng) -> Result<Self::Outcome, ExperimentError>;
}
