use std::io::{BufRead, Write};

use tracing::warn;

use super::EXIT_MESSAGE;
use crate::console::{parse_integer, Console};
use crate::experiments::dice::{simulate_dice_rolls, DiceReport};
use crate::presentation::{render_structured, OutputFormat};
use crate::simulator::Simulation;
use crate::utils::errors::ExperimentError;

const PROMPT: &str = "Enter the number of times to roll the dice: ";

/// Ask once for a roll count and print the report.  Unlike the other
/// programs there is no retry: invalid input prints an error and the
/// session ends with `None`.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    simulation: &mut Simulation,
    format: OutputFormat,
) -> Result<Option<DiceReport>, ExperimentError> {
    let line = match console.prompt(PROMPT)? {
        Some(line) => line,
        None => {
            console.say(EXIT_MESSAGE)?;
            return Ok(None);
        }
    };
    match parse_integer(&line) {
        Some(rolls) => report(console, simulation, rolls, format),
        None => {
            warn!(input = %line, "rejected roll count");
            console.say("Error: Please enter a valid integer.")?;
            Ok(None)
        }
    }
}

/// Roll `rolls` dice and print the report.  A count of zero or below prints
/// an error instead.
pub fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    simulation: &mut Simulation,
    rolls: i64,
    format: OutputFormat,
) -> Result<Option<DiceReport>, ExperimentError> {
    match simulate_dice_rolls(rolls, simulation) {
        Ok(report) => {
            match format {
                OutputFormat::Text => console.say(format!("\n{}", report))?,
                _ => console.print(render_structured(&report, format)?)?,
            }
            Ok(Some(report))
        }
        Err(err @ ExperimentError::NonPositiveCount) => {
            warn!(rolls, "rejected roll count");
            console.say(format!("Error: {}", err))?;
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
