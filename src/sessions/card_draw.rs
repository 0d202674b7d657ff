use std::io::{BufRead, Write};

use tracing::info;

use super::EXIT_MESSAGE;
use crate::console::{parse_integer, Console};
use crate::experiments::card_draw::{self, CardDraw, CardDrawSummary};
use crate::presentation::{card_draw_chart, card_draw_summary, render_structured, OutputFormat};
use crate::simulator::Simulation;
use crate::utils::errors::ExperimentError;

const PROMPT: &str = "Enter the number of trials to run (or 0 to exit): ";

/// Ask for trial counts until the player enters 0 or input ends, running
/// the experiment for each positive count.  Returns the summaries of the
/// runs, in order.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    simulation: &mut Simulation,
    experiment: &CardDraw,
    format: OutputFormat,
) -> Result<Vec<CardDrawSummary>, ExperimentError> {
    let mut summaries = Vec::new();
    loop {
        let requested = console.prompt_until(PROMPT, |line| match parse_integer(line) {
            None => Err("Please enter a valid integer."),
            Some(trials) if trials < 0 => Err("Please enter a positive number."),
            Some(trials) => Ok(trials as u64),
        })?;
        match requested {
            None => {
                console.say(EXIT_MESSAGE)?;
                break;
            }
            Some(0) => break,
            Some(trials) => summaries.push(run_once(console, simulation, experiment, trials, format)?),
        }
    }
    info!(runs = summaries.len(), "card draw session finished");
    Ok(summaries)
}

/// Run the experiment once and print its chart and summary.
pub fn run_once<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    simulation: &mut Simulation,
    experiment: &CardDraw,
    trials: u64,
    format: OutputFormat,
) -> Result<CardDrawSummary, ExperimentError> {
    let run = match format {
        OutputFormat::Text => {
            console.say(format!("Running {} simulations...", trials))?;
            let run = card_draw::simulate(simulation, experiment, trials)?;
            console.print(card_draw_chart(&run))?;
            console.print(card_draw_summary(&run))?;
            run
        }
        _ => {
            let run = card_draw::simulate(simulation, experiment, trials)?;
            console.print(render_structured(&run.summary, format)?)?;
            run
        }
    };
    console.flush()?;
    Ok(run.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(input: &str) -> (Vec<CardDrawSummary>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut simulation = Simulation::seeded(11);
        let summaries = run(
            &mut console,
            &mut simulation,
            &CardDraw::default(),
            OutputFormat::Text,
        )
        .unwrap();
        (summaries, String::from_utf8(console.into_writer()).unwrap())
    }

    #[test]
    fn zero_exits_without_running() {
        let (summaries, output) = play("0\n");
        assert!(summaries.is_empty());
        assert_eq!(output, PROMPT);
    }

    #[test]
    fn invalid_and_negative_counts_reprompt() {
        let (summaries, output) = play("ten\n-4\n0\n");
        assert!(summaries.is_empty());
        assert_eq!(
            output,
            format!(
                "{p}Please enter a valid integer.\n{p}Please enter a positive number.\n{p}",
                p = PROMPT
            )
        );
    }

    #[test]
    fn positive_count_runs_and_reports() {
        let (summaries, output) = play("200\n0\n");
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].trials(), 200);
        assert!(output.contains("Running 200 simulations...\n"));
        assert!(output.contains("Card Drawing Simulation Results\n"));
        let expected = format!(
            "Final probability after 200 trials: {:.4}\n",
            summaries[0].final_ratio().unwrap()
        );
        assert!(output.contains(&expected));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (summaries, output) = play("5\n");
        assert_eq!(summaries.len(), 1);
        assert!(output.ends_with(&format!("{}{}\n", PROMPT, EXIT_MESSAGE)));
    }
}
