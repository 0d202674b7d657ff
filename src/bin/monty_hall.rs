//! The Monty Hall game, played interactively or simulated in bulk to
//! compare the stay and switch strategies.

use anyhow::{Context, Result};
use clap::Parser;

use probsim::console;
use probsim::experiments::Door;
use probsim::presentation::OutputFormat;
use probsim::sessions;
use probsim::sessions::monty_hall::{self, Mode, Options};
use probsim::simulator::Simulation;
use probsim::utils::logging;

#[derive(Parser)]
#[command(
    name = "monty-hall",
    version,
    about = "Play or simulate the Monty Hall problem"
)]
struct Cli {
    /// Seed for the random source; entropy seeded when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Mode to run instead of prompting for one.
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Number of games in simulation mode.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    trials: Option<u64>,

    /// Initial door in simulation mode.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=3))]
    door: Option<u64>,

    /// Output format for simulation results.
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

    let door = cli
        .door
        .map(|number| Door::from_number(number as usize))
        .transpose()
        .context("initial door")?;
    let options = Options {
        mode: cli.mode,
        trials: cli.trials,
        door,
        format: cli.format,
    };
    let mut simulation = Simulation::post(cli.seed);
    let mut console = console::stdio();
    monty_hall::run(&mut console, &mut simulation, options).context("monty hall session")?;
    console.flush().context("flush stdout")?;
    Ok(())
}
