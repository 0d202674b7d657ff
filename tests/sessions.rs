use std::io::Cursor;

use probsim::console::Console;
use probsim::experiments::CardDraw;
use probsim::presentation::OutputFormat;
use probsim::sessions::{self, monty_hall};
use probsim::simulator::Simulation;

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_writer()).unwrap()
}

#[test]
fn card_draw_session_runs_each_requested_count() {
    let mut console = console("50\nx\n-1\n25\n0\n");
    let mut simulation = Simulation::seeded(99);
    let summaries = sessions::card_draw::run(
        &mut console,
        &mut simulation,
        &CardDraw::default(),
        OutputFormat::Text,
    )
    .unwrap();
    let trials: Vec<u64> = summaries.iter().map(|summary| summary.trials()).collect();
    assert_eq!(trials, vec![50, 25]);
    assert_eq!(simulation.services().trials_run(), 75);

    let output = transcript(console);
    assert!(output.contains("Running 50 simulations...\n"));
    assert!(output.contains("Please enter a valid integer.\n"));
    assert!(output.contains("Please enter a positive number.\n"));
    assert!(output.contains("Final probability after 25 trials: "));
    assert!(!output.contains("Exiting..."));
}

#[test]
fn dice_session_stops_on_invalid_input() {
    let mut console = console("many\n100\n");
    let mut simulation = Simulation::seeded(99);
    let report = sessions::dice::run(&mut console, &mut simulation, OutputFormat::Text).unwrap();
    assert!(report.is_none());
    assert_eq!(simulation.services().trials_run(), 0);
    assert!(transcript(console).ends_with("Error: Please enter a valid integer.\n"));
}

#[test]
fn dice_session_reports_as_yaml() {
    let mut console = console("30\n");
    let mut simulation = Simulation::seeded(99);
    let report = sessions::dice::run(&mut console, &mut simulation, OutputFormat::Yaml)
        .unwrap()
        .unwrap();
    let output = transcript(console);
    let yaml = output
        .strip_prefix("Enter the number of times to roll the dice: ")
        .unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(value["rolls"].as_u64(), Some(report.rolls()));
}

#[test]
fn monty_hall_interactive_game_narrates_every_door() {
    let mut console = console("1\n2\nno\n");
    let mut simulation = Simulation::seeded(99);
    let outcome =
        monty_hall::run(&mut console, &mut simulation, monty_hall::Options::default()).unwrap();
    let resolution = match outcome {
        monty_hall::Outcome::Played(resolution) => resolution,
        other => panic!("unexpected outcome {:?}", other),
    };
    assert_eq!(resolution.final_choice.number(), 2);

    let output = transcript(console);
    assert!(output.contains("\nWelcome to the Monty Hall Game!\n"));
    assert!(output.contains(", which has a goat.\n"));
    assert!(output.contains("\nYou stayed with your original choice.\n"));
    assert!(output.contains(&format!("\nYou got a {}!\n", resolution.prize)));
    for door in 1..=3 {
        assert!(output.contains(&format!("Door {}: ", door)));
    }
}

#[test]
fn monty_hall_interrupt_mid_game_exits() {
    let mut console = console("1\n3\n");
    let mut simulation = Simulation::seeded(99);
    let outcome =
        monty_hall::run(&mut console, &mut simulation, monty_hall::Options::default()).unwrap();
    assert!(matches!(outcome, monty_hall::Outcome::Interrupted));
    assert!(transcript(console).ends_with("(yes/no): \nExiting...\n"));
}
