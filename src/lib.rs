//! # Overview
//! "probsim" runs four classic probability experiments, as console programs
//! and as a library for Rust- and npm-based projects.
//!
//! This repository contains:
//!
//! * Experiments: the birthday paradox curve, the card draw position
//! experiment, dice roll frequencies, and the Monty Hall game.
//! * Random variable framework, for seeded, reproducible randomness.
//! * Output analysis framework, for confidence intervals and goodness of fit
//! on simulated proportions.
//! * Simulator engine, for repeating trials and aggregating their outcomes.
//! * Console sessions and terminal charts, for the four programs under
//! `src/bin`.
//!
//! The library is compatible with a wide variety of compilation targets,
//! including WASM. It does not require nightly Rust.
pub mod console;
pub mod experiments;
pub mod input_modeling;
pub mod output_analysis;
pub mod presentation;
pub mod sessions;
pub mod simulator;
pub mod utils;
