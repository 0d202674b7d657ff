//! Birthday paradox: the probability that at least two people in a group
//! share a birthday, charted for groups of 1 to 100 people.

use anyhow::{Context, Result};
use clap::Parser;

use probsim::console;
use probsim::presentation::OutputFormat;
use probsim::sessions;
use probsim::utils::logging;

#[derive(Parser)]
#[command(
    name = "birthday",
    version,
    about = "Chart the birthday paradox probability curve"
)]
struct Cli {
    /// Largest group size on the chart.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    max_group: u32,

    /// Print only the probability for this group size.
    #[arg(long)]
    group: Option<u32>,

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

    let mut console = console::stdio();
    sessions::birthday::run(&mut console, cli.max_group, cli.group, cli.format)
        .context("birthday chart")?;
    console.flush().context("flush stdout")?;
    Ok(())
}
