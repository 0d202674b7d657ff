#![cfg(unix)]

use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};

/// Start `bin`, wait until it has printed `prompt`, then send it SIGINT.
/// Returns the exit status and everything written to stdout.
fn interrupt_at_prompt(bin: &str, args: &[&str], prompt: &str) -> (ExitStatus, String) {
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    let mut stdout = child.stdout.take().unwrap();
    let mut seen = Vec::new();
    let mut byte = [0u8; 1];
    while !String::from_utf8_lossy(&seen).ends_with(prompt) {
        let read = stdout.read(&mut byte).unwrap();
        assert!(
            read > 0,
            "exited before prompting: {}",
            String::from_utf8_lossy(&seen)
        );
        seen.push(byte[0]);
    }
    let kill = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(kill.success());
    stdout.read_to_end(&mut seen).unwrap();
    let status = child.wait().unwrap();
    (status, String::from_utf8(seen).unwrap())
}

#[test]
fn card_draw_exits_cleanly_on_ctrl_c() {
    let prompt = "Enter the number of trials to run (or 0 to exit): ";
    let (status, output) =
        interrupt_at_prompt(env!("CARGO_BIN_EXE_card-draw"), &["--seed", "1"], prompt);
    assert_eq!(status.code(), Some(0));
    assert_eq!(output, format!("{}\nExiting...\n", prompt));
}

#[test]
fn dice_exits_cleanly_on_ctrl_c() {
    let prompt = "Enter the number of times to roll the dice: ";
    let (status, output) = interrupt_at_prompt(env!("CARGO_BIN_EXE_dice"), &[], prompt);
    assert_eq!(status.code(), Some(0));
    assert!(output.ends_with("\nExiting...\n"));
}

#[test]
fn monty_hall_exits_cleanly_on_ctrl_c() {
    let (status, output) = interrupt_at_prompt(
        env!("CARGO_BIN_EXE_monty-hall"),
        &["--seed", "1"],
        "Enter mode (1 or 2): ",
    );
    assert_eq!(status.code(), Some(0));
    assert!(output.ends_with("Enter mode (1 or 2): \nExiting...\n"));
}
