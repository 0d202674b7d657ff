//! Card draw experiment: how often is the first 2 of a shuffled deck the
//! 14th card?  Prompts for trial counts until 0 or end of input.

use anyhow::{Context, Result};
use clap::Parser;

use probsim::console;
use probsim::experiments::CardDraw;
use probsim::presentation::OutputFormat;
use probsim::sessions;
use probsim::simulator::Simulation;
use probsim::utils::logging;

#[derive(Parser)]
#[command(
    name = "card-draw",
    version,
    about = "Simulate the position of the first 2 in a shuffled deck"
)]
struct Cli {
    /// Seed for the random source; entropy seeded when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many trials once instead of prompting.
    #[arg(long)]
    trials: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();
    sessions::exit_on_interrupt().context("install Ctrl-C handler")?;

    let mut simulation = Simulation::post(cli.seed);
    let experiment = CardDraw::default();
    let mut console = console::stdio();
    match cli.trials {
        Some(trials) => {
            sessions::card_draw::run_once(
                &mut console,
                &mut simulation,
                &experiment,
                trials,
                cli.format,
            )
            .with_context(|| format!("card draw run of {} trials", trials))?;
        }
        None => {
            sessions::card_draw::run(&mut console, &mut simulation, &experiment, cli.format)
                .context("card draw session")?;
        }
    }
    Ok(())
}
