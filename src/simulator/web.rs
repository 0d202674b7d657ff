use std::fmt::Display;

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::experiments::birthday::{birthday_curve, birthday_probability};
use crate::experiments::card_draw::{self, CardDraw};
use crate::experiments::dice::simulate_dice_rolls;
use crate::experiments::monty_hall::{self, Door};

use super::Simulation;

fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The `WebExperiments` provides JS/WASM-compatible interfaces to the
/// experiments, driven by one `Simulation`.  For additional insight on these
/// methods, refer to the associated experiment functions.  Errors are
/// returned to JavaScript as thrown strings.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct WebExperiments {
    simulation: Simulation,
}

#[wasm_bindgen]
impl WebExperiments {
    /// Experiments seeded from the browser's entropy source.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            simulation: Simulation::post(None),
        }
    }

    /// Experiments with a fixed seed, for reproducible pages.
    pub fn seeded(seed: u32) -> Self {
        Self {
            simulation: Simulation::seeded(u64::from(seed)),
        }
    }

    /// An interface to `birthday_probability`.
    pub fn birthday_probability(&self, group_size: u32) -> f64 {
        birthday_probability(group_size)
    }

    /// A JS/WASM interface for `birthday_curve`, which converts the curve
    /// for groups of 1 to `max_group` people to a JSON string.
    pub fn birthday_curve_json(&self, max_group: u32) -> Result<String, JsValue> {
        serde_json::to_string(&birthday_curve(1..=max_group.max(1))).map_err(js_error)
    }

    /// A JS/WASM interface for `card_draw::simulate`, which converts the
    /// running ratios to a JavaScript Array.
    pub fn card_draw_ratios_js(&mut self, trials: u32) -> Result<Array, JsValue> {
        let run = card_draw::simulate(&mut self.simulation, &CardDraw::default(), u64::from(trials))
            .map_err(js_error)?;
        Ok(run
            .series
            .ratios()
            .iter()
            .map(|ratio| JsValue::from_f64(*ratio))
            .collect())
    }

    /// A JS/WASM interface for `card_draw::simulate`, which converts the run
    /// summary to a JSON string.
    pub fn card_draw_json(&mut self, trials: u32) -> Result<String, JsValue> {
        let run = card_draw::simulate(&mut self.simulation, &CardDraw::default(), u64::from(trials))
            .map_err(js_error)?;
        serde_json::to_string(&run.summary).map_err(js_error)
    }

    /// A JS/WASM interface for `simulate_dice_rolls`, which converts the
    /// report to a JSON string.
    pub fn dice_report_json(&mut self, rolls: i32) -> Result<String, JsValue> {
        let report =
            simulate_dice_rolls(i64::from(rolls), &mut self.simulation).map_err(js_error)?;
        serde_json::to_string(&report).map_err(js_error)
    }

    /// A JS/WASM interface for `monty_hall::simulate`, with the initial door
    /// numbered 1 to 3, which converts the summary to a JSON string.
    pub fn monty_hall_json(&mut self, door: u32, trials: u32) -> Result<String, JsValue> {
        let door = Door::from_number(door as usize).map_err(js_error)?;
        let summary = monty_hall::simulate(&mut self.simulation, door, u64::from(trials))
            .map_err(js_error)?;
        serde_json::to_string(&summary).map_err(js_error)
    }

    /// An interface to `Services.trials_run`.
    pub fn trials_run(&self) -> f64 {
        self.simulation.services().trials_run() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_curve_json_lists_every_group() {
        let experiments = WebExperiments::seeded(3);
        let json = experiments.birthday_curve_json(30).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["points"].as_array().unwrap().len(), 30);
        assert!((experiments.birthday_probability(23) - 0.5073).abs() < 1e-4);
    }

    #[test]
    fn runs_share_one_generator() {
        let mut experiments = WebExperiments::seeded(3);
        let dice: serde_json::Value =
            serde_json::from_str(&experiments.dice_report_json(120).unwrap()).unwrap();
        assert_eq!(dice["rolls"], 120);
        let monty: serde_json::Value =
            serde_json::from_str(&experiments.monty_hall_json(2, 80).unwrap()).unwrap();
        assert_eq!(monty["trials"], 80);
        let cards: serde_json::Value =
            serde_json::from_str(&experiments.card_draw_json(40).unwrap()).unwrap();
        assert_eq!(cards["trials"], 40);
        assert_eq!(experiments.trials_run(), 240.0);
    }

    #[test]
    fn seeded_runs_repeat() {
        let mut first = WebExperiments::seeded(8);
        let mut second = WebExperiments::seeded(8);
        assert_eq!(
            first.monty_hall_json(1, 200).unwrap(),
            second.monty_hall_json(1, 200).unwrap()
        );
    }
}
