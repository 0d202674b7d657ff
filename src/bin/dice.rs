//! Dice roll frequencies: roll a fair die many times and report how often
//! each face came up.

use anyhow::{Context, Result};
use clap::Parser;

use probsim::console;
use probsim::presentation::OutputFormat;
use probsim::sessions;
use probsim::simulator::Simulation;
use probsim::utils::logging;

#[derive(Parser)]
#[command(name = "dice", version, about = "Tally the faces of simulated dice rolls")]
struct Cli {
    /// Seed for the random source; entropy seeded when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Roll this many times instead of prompting.
    #[arg(long, allow_negative_numbers = true)]
    rolls: Option<i64>,

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
    let mut console = console::stdio();
    let outcome = match cli.rolls {
        Some(rolls) => sessions::dice::report(&mut console, &mut simulation, rolls, cli.format),
        None => sessions::dice::run(&mut console, &mut simulation, cli.format),
    };
    outcome.context("dice session")?;
    console.flush().context("flush stdout")?;
    Ok(())
}
