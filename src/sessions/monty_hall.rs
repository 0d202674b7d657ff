use std::io::{BufRead, Write};

use clap::ValueEnum;
use tracing::info;

use super::EXIT_MESSAGE;
use crate::console::{parse_integer, Console};
use crate::experiments::monty_hall::{
    self, Decision, Door, MontyHallGame, MontyHallSummary, Resolution,
};
use crate::presentation::{monty_hall_report, render_structured, OutputFormat};
use crate::simulator::Simulation;
use crate::utils::errors::ExperimentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Play a single game
    Interactive,
    /// Simulate many games and compare strategies
    Simulation,
}

/// Answers supplied up front; anything left as `None` is prompted for.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub mode: Option<Mode>,
    pub trials: Option<u64>,
    pub door: Option<Door>,
    pub format: OutputFormat,
}

/// What a session ended with.
#[derive(Debug, Clone)]
pub enum Outcome {
    Played(Resolution),
    Simulated(MontyHallSummary),
    Interrupted,
}

fn parse_door(line: &str) -> Result<Door, &'static str> {
    let number = parse_integer(line).ok_or("Please enter a valid number.")?;
    if !(1..=3).contains(&number) {
        return Err("Please enter 1, 2, or 3.");
    }
    Door::from_number(number as usize).map_err(|_| "Please enter 1, 2, or 3.")
}

fn parse_decision(line: &str) -> Result<Decision, &'static str> {
    match line.trim().to_lowercase().as_str() {
        "yes" => Ok(Decision::Switch),
        "no" => Ok(Decision::Stay),
        _ => Err("Please answer 'yes' or 'no'."),
    }
}

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    simulation: &mut Simulation,
    options: Options,
) -> Result<Outcome, ExperimentError> {
    console.say("Welcome to the Monty Hall Problem Simulator!")?;
    console.say("\nChoose a mode:")?;
    console.say("1. Interactive Game")?;
    console.say("2. Simulation Mode")?;

    let mode = match options.mode {
        Some(mode) => Some(mode),
        None => console.prompt_until("\nEnter mode (1 or 2): ", |line| {
            match parse_integer(line).ok_or("Please enter a valid number.")? {
                1 => Ok(Mode::Interactive),
                2 => Ok(Mode::Simulation),
                _ => Err("Please enter 1 or 2."),
            }
        })?,
    };
    let outcome = match mode {
        Some(Mode::Interactive) => play(console, simulation)?,
        Some(Mode::Simulation) => batch(console, simulation, options)?,
        None => Outcome::Interrupted,
    };
    if let Outcome::Interrupted = outcome {
        console.say(EXIT_MESSAGE)?;
    }
    Ok(outcome)
}

/// One narrated game: choose, watch the host open a goat door, decide,
/// and see every door.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    simulation: &mut Simulation,
) -> Result<Outcome, ExperimentError> {
    let game = MontyHallGame::new(simulation.uniform_rng());
    play_game(console, simulation, game)
}

/// Play `game` on the console.  Separate from `play` so a known door layout
/// can be scripted.
pub fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    simulation: &mut Simulation,
    mut game: MontyHallGame,
) -> Result<Outcome, ExperimentError> {
    console.say("\nWelcome to the Monty Hall Game!")?;
    console.say("Behind two doors are goats, and behind one door is a car.")?;

    let choice = match console.prompt_until("\nChoose a door (1, 2, or 3): ", parse_door)? {
        Some(choice) => choice,
        None => return Ok(Outcome::Interrupted),
    };
    let opened = game.choose(choice, simulation.uniform_rng())?;
    console.say(format!("\nI'll open door {}, which has a goat.", opened))?;

    let decision = match console.prompt_until(
        "\nWould you like to switch doors? (yes/no): ",
        parse_decision,
    )? {
        Some(decision) => decision,
        None => return Ok(Outcome::Interrupted),
    };
    let resolution = game.decide(decision)?;
    match decision {
        Decision::Switch => {
            console.say(format!("\nYou switched to door {}.", resolution.final_choice))?
        }
        Decision::Stay => console.say("\nYou stayed with your original choice.")?,
    }

    console.say(format!("\nYou got a {}!", resolution.prize))?;
    console.say("\nFinal door contents:")?;
    for door in Door::ALL.iter() {
        console.say(format!("Door {}: {}", door, resolution.doors[door.index()]))?;
    }
    info!(won = resolution.won(), ?decision, "game finished");
    Ok(Outcome::Played(resolution))
}

/// Simulation mode: ask for the trial count and the initial door, then
/// print both strategies' win probabilities.
pub fn batch<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    simulation: &mut Simulation,
    options: Options,
) -> Result<Outcome, ExperimentError> {
    let trials = match options.trials {
        Some(trials) => Some(trials),
        None => console.prompt_until("\nEnter number of trials: ", |line| {
            match parse_integer(line).ok_or("Please enter a valid number.")? {
                trials if trials > 0 => Ok(trials as u64),
                _ => Err("Please enter a positive number."),
            }
        })?,
    };
    let trials = match trials {
        Some(trials) => trials,
        None => return Ok(Outcome::Interrupted),
    };
    let door = match options.door {
        Some(door) => Some(door),
        None => console.prompt_until("Enter your initial door choice (1, 2, or 3): ", parse_door)?,
    };
    let door = match door {
        Some(door) => door,
        None => return Ok(Outcome::Interrupted),
    };

    let summary = monty_hall::simulate(simulation, door, trials)?;
    match options.format {
        OutputFormat::Text => console.print(monty_hall_report(&summary))?,
        format => console.print(render_structured(&summary, format)?)?,
    }
    console.flush()?;
    Ok(Outcome::Simulated(summary))
}
