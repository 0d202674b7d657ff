//! Console sessions of the four programs.  Each session only talks to a
//! `Console` and a `Simulation`, so a test can play a whole session from a
//! scripted input and check the transcript.

pub mod birthday;
pub mod card_draw;
pub mod dice;
pub mod monty_hall;

/// Printed when input ends or Ctrl-C arrives in the middle of a prompt loop.
pub const EXIT_MESSAGE: &str = "\nExiting...";

/// Install a Ctrl-C handler that prints `EXIT_MESSAGE` and exits with
/// status 0.  Called once, before the first prompt.
#[cfg(not(target_arch = "wasm32"))]
pub fn exit_on_interrupt() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        println!("{}", EXIT_MESSAGE);
        std::process::exit(0);
    })
}
