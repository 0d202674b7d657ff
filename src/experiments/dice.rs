//! Dice roll frequency experiment: roll a fair six-sided die many times and
//! report how often each face came up.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::Trial;
use crate::input_modeling::{DiscreteRandomVariable, UniformRng};
use crate::output_analysis::uniform_chi_square;
use crate::simulator::Simulation;
use crate::utils::errors::ExperimentError;
use crate::utils::percentage;

pub const FACES: usize = 6;

/// A single roll of a fair die.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRoll {
    face_distribution: DiscreteRandomVariable,
}

impl Default for DiceRoll {
    fn default() -> Self {
        Self {
            face_distribution: DiscreteRandomVariable::Uniform {
                min: 1,
                max: FACES as u64 + 1,
            },
        }
    }
}

impl Trial for DiceRoll {
    type Outcome = u8;

    fn trial(&self, uniform_rng: &mut UniformRng) -> Result<u8, ExperimentError> {
        Ok(self.face_distribution.random_variate(uniform_rng)? as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceFrequency {
    pub face: u8,
    pub count: u64,
    pub percentage: f64,
}

/// Per-face counts and percentages of a dice roll run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceReport {
    rolls: u64,
    frequencies: Vec<FaceFrequency>,
    chi_square: f64,
}

impl DiceReport {
    /// Build a report from the count of each face, face 1 first.
    pub fn from_counts(counts: [u64; FACES]) -> Result<Self, ExperimentError> {
        let rolls: u64 = counts.iter().sum();
        if rolls == 0 {
            return Err(ExperimentError::NonPositiveCount);
        }
        let frequencies = counts
            .iter()
            .enumerate()
            .map(|(index, count)| FaceFrequency {
                face: index as u8 + 1,
                count: *count,
                percentage: percentage(*count, rolls),
            })
            .collect();
        Ok(Self {
            rolls,
            frequencies,
            chi_square: uniform_chi_square(&counts)?,
        })
    }

    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    pub fn frequencies(&self) -> &[FaceFrequency] {
        &self.frequencies
    }

    pub fn frequency(&self, face: u8) -> Option<&FaceFrequency> {
        self.frequencies
            .iter()
            .find(|frequency| frequency.face == face)
    }

    /// Chi-square statistic of the face counts against a fair die, with
    /// five degrees of freedom.
    pub fn chi_square(&self) -> f64 {
        self.chi_square
    }
}

impl fmt::Display for DiceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results of {} dice rolls:", self.rolls)?;
        for frequency in &self.frequencies {
            writeln!(
                f,
                "Number {}: {} times ({:.2}%)",
                frequency.face, frequency.count, frequency.percentage
            )?;
        }
        Ok(())
    }
}

/// Roll a fair die `rolls` times and tally the faces.  Counts of zero or
/// below are rejected.
pub fn simulate_dice_rolls(
    rolls: i64,
    simulation: &mut Simulation,
) -> Result<DiceReport, ExperimentError> {
    if rolls <= 0 {
        return Err(ExperimentError::NonPositiveCount);
    }
    let counts = simulation.fold_trials(
        &DiceRoll::default(),
        rolls as u64,
        [0u64; FACES],
        |mut counts, face| {
            counts[usize::from(face) - 1] += 1;
            counts
        },
    )?;
    let report = DiceReport::from_counts(counts)?;
    info!(rolls, chi_square = report.chi_square, "dice run complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_rolls_are_rejected() {
        let mut simulation = Simulation::seeded(5);
        assert!(matches!(
            simulate_dice_rolls(0, &mut simulation),
            Err(ExperimentError::NonPositiveCount)
        ));
        assert!(matches!(
            simulate_dice_rolls(-3, &mut simulation),
            Err(ExperimentError::NonPositiveCount)
        ));
        assert_eq!(simulation.services().trials_run(), 0);
    }

    #[test]
    fn counts_sum_to_rolls() {
        let mut simulation = Simulation::seeded(5);
        let report = simulate_dice_rolls(1234, &mut simulation).unwrap();
        assert_eq!(report.rolls(), 1234);
        assert_eq!(
            report.frequencies().iter().map(|f| f.count).sum::<u64>(),
            1234
        );
        let faces: Vec<u8> = report.frequencies().iter().map(|f| f.face).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn report_text_matches_format() {
        let report = DiceReport::from_counts([1, 1, 0, 0, 1, 1]).unwrap();
        assert_eq!(
            report.to_string(),
            "Results of 4 dice rolls:\n\
             Number 1: 1 times (25.00%)\n\
             Number 2: 1 times (25.00%)\n\
             Number 3: 0 times (0.00%)\n\
             Number 4: 0 times (0.00%)\n\
             Number 5: 1 times (25.00%)\n\
             Number 6: 1 times (25.00%)\n"
        );
        assert_eq!(report.frequency(3).unwrap().count, 0);
        assert!(report.frequency(7).is_none());
    }

    #[test]
    fn single_roll_is_all_one_face() {
        let mut simulation = Simulation::seeded(5);
        let report = simulate_dice_rolls(1, &mut simulation).unwrap();
        let hits: Vec<&FaceFrequency> = report
            .frequencies()
            .iter()
            .filter(|frequency| frequency.count == 1)
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].percentage, 100.0);
    }
}
