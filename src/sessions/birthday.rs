use std::io::{BufRead, Write};

use crate::console::Console;
use crate::experiments::birthday::{birthday_curve, birthday_probability};
use crate::presentation::{birthday_report, render_structured, OutputFormat};
use crate::utils::errors::ExperimentError;

/// Print the birthday curve for groups of 1 to `max_group` people with
/// p(23) highlighted, or only p(`group`) when a single group is asked for.
/// There is no input to read.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    max_group: u32,
    group: Option<u32>,
    format: OutputFormat,
) -> Result<(), ExperimentError> {
    if let Some(group) = group {
        let probability = birthday_probability(group);
        return match format {
            OutputFormat::Text => console.say(format!("p({}) = {:.4}", group, probability)),
            _ => console.print(render_structured(
                &serde_json::json!({ "groupSize": group, "probability": probability }),
                format,
            )?),
        };
    }
    let curve = birthday_curve(1..=max_group.max(1));
    match format {
        OutputFormat::Text => console.print(birthday_report(&curve)),
        _ => console.print(render_structured(&curve, format)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(max_group: u32, group: Option<u32>, format: OutputFormat) -> String {
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        run(&mut console, max_group, group, format).unwrap();
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn single_group_prints_one_line() {
        assert_eq!(
            transcript(100, Some(23), OutputFormat::Text),
            "p(23) = 0.5073\n"
        );
    }

    #[test]
    fn curve_ends_with_highlight() {
        let output = transcript(100, None, OutputFormat::Text);
        assert!(output.starts_with("Birthday Paradox Probability\n"));
        assert!(output.ends_with("p(23) = 0.5073\n"));
    }

    #[test]
    fn json_curve_lists_every_group() {
        let output = transcript(40, None, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["points"].as_array().unwrap().len(), 40);
        assert_eq!(value["highlight"][0], 23);
    }
}
