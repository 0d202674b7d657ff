//! The Monty Hall game.  A car hides behind one of three doors and goats
//! behind the other two.  The player picks a door, the host opens a
//! different door hiding a goat, and the player either stays or switches to
//! the one door left closed.
//!
//! The batch simulation (`simulate`) and the single interactive game
//! (`MontyHallGame`) share `deal`, `host_reveal`, and `switch_target`, so a
//! scripted game follows exactly the same transitions as a simulated trial.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::Trial;
use crate::input_modeling::{shuffle, IndexRandomVariable, UniformRng};
use crate::output_analysis::{ConfidenceInterval, RunningAggregate};
use crate::simulator::Simulation;
use crate::utils::errors::ExperimentError;

pub const DOOR_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Prize {
    Goat,
    Car,
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prize::Goat => write!(f, "goat"),
            Prize::Car => write!(f, "car"),
        }
    }
}

/// A door, stored zero-indexed and shown to players one-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Door(usize);

impl Door {
    pub const ALL: [Door; DOOR_COUNT] = [Door(0), Door(1), Door(2)];

    pub fn new(index: usize) -> Result<Self, ExperimentError> {
        if index >= DOOR_COUNT {
            return Err(ExperimentError::InvalidDoor(index + 1));
        }
        Ok(Door(index))
    }

    /// A door from the number a player uses: 1, 2, or 3.
    pub fn from_number(number: usize) -> Result<Self, ExperimentError> {
        match number {
            1..=DOOR_COUNT => Ok(Door(number - 1)),
            _ => Err(ExperimentError::InvalidDoor(number)),
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// What stands behind each door, indexed by `Door::index`.
pub type Doors = [Prize; DOOR_COUNT];

/// Place the car behind a uniformly random door.
pub fn deal(uniform_rng: &mut UniformRng) -> Doors {
    let mut doors = [Prize::Goat, Prize::Goat, Prize::Car];
    shuffle(&mut doors, uniform_rng);
    doors
}

/// The door the host opens: a goat door other than the player's choice.
/// With two such doors the host picks one uniformly at random; with only
/// one, the host has to open it.
pub fn host_reveal(
    doors: &Doors,
    choice: Door,
    uniform_rng: &mut UniformRng,
) -> Result<Door, ExperimentError> {
    let candidates: Vec<Door> = Door::ALL
        .iter()
        .copied()
        .filter(|door| *door != choice && doors[door.index()] == Prize::Goat)
        .collect();
    match candidates.as_slice() {
        [] => Err(ExperimentError::NoRevealableDoor),
        [forced] => Ok(*forced),
        _ => {
            let pick = IndexRandomVariable::Uniform {
                min: 0,
                max: candidates.len(),
            }
            .random_variate(uniform_rng)?;
            Ok(candidates[pick])
        }
    }
}

/// The single door that is neither the player's choice nor opened.
pub fn switch_target(choice: Door, opened: Door) -> Result<Door, ExperimentError> {
    if choice == opened {
        return Err(ExperimentError::InvalidGameState);
    }
    Door::ALL
        .iter()
        .copied()
        .find(|door| *door != choice && *door != opened)
        .ok_or(ExperimentError::InvalidGameState)
}

/// Outcome of one trial, scored for both strategies against the same doors
/// and the same host action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MontyHallTrial {
    pub doors: Doors,
    pub initial_choice: Door,
    pub opened: Door,
    pub switch_target: Door,
}

impl MontyHallTrial {
    pub fn stay_wins(&self) -> bool {
        self.doors[self.initial_choice.index()] == Prize::Car
    }

    pub fn switch_wins(&self) -> bool {
        self.doors[self.switch_target.index()] == Prize::Car
    }
}

/// Trials of the game with a fixed initial choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MontyHall {
    initial_choice: Door,
}

impl MontyHall {
    pub fn new(initial_choice: Door) -> Self {
        Self { initial_choice }
    }

    /// A trial against a known door layout; only the host's choice is
    /// random.
    pub fn trial_with_doors(
        &self,
        doors: Doors,
        uniform_rng: &mut UniformRng,
    ) -> Result<MontyHallTrial, ExperimentError> {
        let opened = host_reveal(&doors, self.initial_choice, uniform_rng)?;
        Ok(MontyHallTrial {
            doors,
            initial_choice: self.initial_choice,
            opened,
            switch_target: switch_target(self.initial_choice, opened)?,
        })
    }
}

impl Trial for MontyHall {
    type Outcome = MontyHallTrial;

    fn trial(&self, uniform_rng: &mut UniformRng) -> Result<MontyHallTrial, ExperimentError> {
        let doors = deal(uniform_rng);
        self.trial_with_doors(doors, uniform_rng)
    }
}

/// Win probabilities of both strategies over a batch of trials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MontyHallSummary {
    trials: u64,
    initial_choice: Door,
    stay_wins: u64,
    switch_wins: u64,
    stay_probability: f64,
    switch_probability: f64,
    stay_interval: ConfidenceInterval<f64>,
    switch_interval: ConfidenceInterval<f64>,
}

impl MontyHallSummary {
    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn initial_choice(&self) -> Door {
        self.initial_choice
    }

    pub fn stay_wins(&self) -> u64 {
        self.stay_wins
    }

    pub fn switch_wins(&self) -> u64 {
        self.switch_wins
    }

    pub fn stay_probability(&self) -> f64 {
        self.stay_probability
    }

    pub fn switch_probability(&self) -> f64 {
        self.switch_probability
    }

    /// 95% confidence interval on the stay strategy's win probability.
    pub fn stay_interval(&self) -> ConfidenceInterval<f64> {
        self.stay_interval
    }

    /// 95% confidence interval on the switch strategy's win probability.
    pub fn switch_interval(&self) -> ConfidenceInterval<f64> {
        self.switch_interval
    }
}

/// Play `trials` games with a fixed `initial_choice`, scoring both the stay
/// and the switch strategy on every game.
pub fn simulate(
    simulation: &mut Simulation,
    initial_choice: Door,
    trials: u64,
) -> Result<MontyHallSummary, ExperimentError> {
    if trials == 0 {
        return Err(ExperimentError::NonPositiveCount);
    }
    let (stay, switch) = simulation.fold_trials(
        &MontyHall::new(initial_choice),
        trials,
        (RunningAggregate::default(), RunningAggregate::default()),
        |(mut stay, mut switch), trial| {
            stay.record(trial.stay_wins());
            switch.record(trial.switch_wins());
            (stay, switch)
        },
    )?;
    let stay_proportion = stay.proportion()?;
    let switch_proportion = switch.proportion()?;
    let summary = MontyHallSummary {
        trials,
        initial_choice,
        stay_wins: stay.successes(),
        switch_wins: switch.successes(),
        stay_probability: stay_proportion.point_estimate_mean(),
        switch_probability: switch_proportion.point_estimate_mean(),
        stay_interval: stay_proportion.confidence_interval_mean(0.05)?,
        switch_interval: switch_proportion.confidence_interval_mean(0.05)?,
    };
    info!(
        trials,
        stay = summary.stay_probability,
        switch = summary.switch_probability,
        "monty hall run complete"
    );
    Ok(summary)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Decision {
    Stay,
    Switch,
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub decision: Decision,
    pub final_choice: Door,
    pub prize: Prize,
    pub doors: Doors,
}

impl Resolution {
    pub fn won(&self) -> bool {
        self.prize == Prize::Car
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingChoice,
    AwaitingDecision { choice: Door, opened: Door },
    Resolved,
}

/// A single game, advanced one player action at a time:
/// choose a door, then stay or switch.
#[derive(Debug, Clone)]
pub struct MontyHallGame {
    doors: Doors,
    phase: Phase,
}

impl MontyHallGame {
    pub fn new(uniform_rng: &mut UniformRng) -> Self {
        Self::with_doors(deal(uniform_rng))
    }

    /// A game with a known layout, for scripted play.
    pub fn with_doors(doors: Doors) -> Self {
        Self {
            doors,
            phase: Phase::AwaitingChoice,
        }
    }

    /// Take the player's first pick; returns the goat door the host opens.
    pub fn choose(
        &mut self,
        choice: Door,
        uniform_rng: &mut UniformRng,
    ) -> Result<Door, ExperimentError> {
        if self.phase != Phase::AwaitingChoice {
            return Err(ExperimentError::InvalidGameState);
        }
        let opened = host_reveal(&self.doors, choice, uniform_rng)?;
        self.phase = Phase::AwaitingDecision { choice, opened };
        Ok(opened)
    }

    pub fn decide(&mut self, decision: Decision) -> Result<Resolution, ExperimentError> {
        let (choice, opened) = match self.phase {
            Phase::AwaitingDecision { choice, opened } => (choice, opened),
            _ => return Err(ExperimentError::InvalidGameState),
        };
        let final_choice = match decision {
            Decision::Stay => choice,
            Decision::Switch => switch_target(choice, opened)?,
        };
        self.phase = Phase::Resolved;
        Ok(Resolution {
            decision,
            final_choice,
            prize: self.doors[final_choice.index()],
            doors: self.doors,
        })
    }

    pub fn doors(&self) -> &Doors {
        &self.doors
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == Phase::Resolved
    }
}
