//! The presentation module consumes experiment results and turns them into
//! something to print: terminal charts, text reports, or structured JSON and
//! YAML.  Nothing in here draws random numbers, so the experiment cores stay
//! testable without any rendering at all.

use clap::ValueEnum;
use serde::Serialize;

use crate::experiments::birthday::BirthdayCurve;
use crate::experiments::card_draw::CardDrawRun;
use crate::experiments::monty_hall::MontyHallSummary;
use crate::output_analysis::ConfidenceInterval;
use crate::utils::errors::ExperimentError;

pub mod chart;

pub use chart::Chart;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with charts
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

/// Render a result as JSON or YAML.  Text output has no generic form, so
/// `OutputFormat::Text` falls back to JSON here.
pub fn render_structured<T: Serialize>(
    value: &T,
    format: OutputFormat,
) -> Result<String, ExperimentError> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Json | OutputFormat::Text => {
            let mut payload = serde_json::to_string_pretty(value)?;
            payload.push('\n');
            Ok(payload)
        }
    }
}

fn format_interval(interval: &ConfidenceInterval<f64>) -> String {
    format!("[{:.4}, {:.4}]", interval.lower(), interval.upper())
}

/// The birthday curve chart with p(23) highlighted, and the p(23) line.
pub fn birthday_report(curve: &BirthdayCurve) -> String {
    let (group_size, probability) = curve.highlight();
    let mut report = Chart::new(
        "Birthday Paradox Probability",
        "Number of People (n)",
        "Probability p(n)",
    )
    .with_y_range(0.0, 1.0)
    .render(
        &curve.xy(),
        Some((f64::from(group_size), probability)),
        None,
    );
    report.push_str(&format!("p({}) = {:.4}\n", group_size, probability));
    report
}

/// The convergence chart of a card draw run, with the analytic probability
/// as a reference line.
pub fn card_draw_chart(run: &CardDrawRun) -> String {
    Chart::new(
        "Card Drawing Simulation Results",
        "Number of Trials",
        "Ratio of Successful Trials",
    )
    .render(
        &run.series.points(),
        None,
        Some(run.summary.exact_probability()),
    )
}

/// Lines printed after a card draw run.
pub fn card_draw_summary(run: &CardDrawRun) -> String {
    let summary = &run.summary;
    let mut report = String::new();
    if let Some(ratio) = summary.final_ratio() {
        report.push_str(&format!(
            "Final probability after {} trials: {:.4}\n",
            summary.trials(),
            ratio
        ));
    }
    report.push_str(&format!(
        "Exact probability: {:.4}\n",
        summary.exact_probability()
    ));
    if let Some(interval) = summary.confidence_interval() {
        report.push_str(&format!(
            "95% confidence interval: {}\n",
            format_interval(&interval)
        ));
    }
    report
}

/// Results block of a Monty Hall batch simulation.
pub fn monty_hall_report(summary: &MontyHallSummary) -> String {
    format!(
        "\nResults after {} trials:\n\
         Probability of winning if you stay: {:.2}%\n\
         Probability of winning if you switch: {:.2}%\n\
         95% confidence intervals: stay {}, switch {}\n",
        summary.trials(),
        summary.stay_probability() * 100.0,
        summary.switch_probability() * 100.0,
        format_interval(&summary.stay_interval()),
        format_interval(&summary.switch_interval()),
    )
}
