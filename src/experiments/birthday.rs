//! The birthday problem: the probability that at least two people in a
//! group share a birthday, assuming 365 equally likely, independent
//! birthdays.  This one is closed-form, so there are no trials.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const DAYS_IN_YEAR: u32 = 365;

/// The group size highlighted on the chart, where the probability first
/// passes one half.
pub const HIGHLIGHTED_GROUP: u32 = 23;

/// Probability that at least two of `group_size` people share a birthday.
///
/// Computed through the complement: the chance that all birthdays differ is
/// the product of (1 - k/365) for k in 1..n.  Groups of zero or one person
/// cannot contain a pair, so they return exactly 0.  Past 365 people a
/// factor of the product is 0, so the result is exactly 1.
pub fn birthday_probability(group_size: u32) -> f64 {
    if group_size <= 1 {
        return 0.0;
    }
    let days = f64::from(DAYS_IN_YEAR);
    let all_distinct = (1..group_size).fold(1.0, |acc, k| acc * (1.0 - f64::from(k) / days));
    1.0 - all_distinct
}

/// Smallest group whose shared-birthday probability reaches `threshold`,
/// or `None` for thresholds above 1.
pub fn smallest_group_for(threshold: f64) -> Option<u32> {
    (0..=DAYS_IN_YEAR + 1).find(|group_size| birthday_probability(*group_size) >= threshold)
}

/// The (group size, probability) curve over a range of group sizes, with
/// the highlighted point carried alongside for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayCurve {
    points: Vec<(u32, f64)>,
    highlight: (u32, f64),
}

impl BirthdayCurve {
    pub fn points(&self) -> &[(u32, f64)] {
        &self.points
    }

    pub fn highlight(&self) -> (u32, f64) {
        self.highlight
    }

    /// The curve as floating point (x, y) pairs, for charting.
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|(group_size, probability)| (f64::from(*group_size), *probability))
            .collect()
    }
}

pub fn birthday_curve(group_sizes: RangeInclusive<u32>) -> BirthdayCurve {
    BirthdayCurve {
        points: group_sizes
            .map(|group_size| (group_size, birthday_probability(group_size)))
            .collect(),
        highlight: (
            HIGHLIGHTED_GROUP,
            birthday_probability(HIGHLIGHTED_GROUP),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_groups_have_zero_probability() {
        assert_eq!(birthday_probability(0), 0.0);
        assert_eq!(birthday_probability(1), 0.0);
    }

    #[test]
    fn pair_probability() {
        assert!((birthday_probability(2) - 1.0 / 365.0).abs() < 1.0e-15);
    }

    #[test]
    fn twenty_three_people_pass_one_half() {
        assert!((birthday_probability(23) - 0.5073).abs() < 0.001);
        assert!(birthday_probability(22) < 0.5);
        assert_eq!(smallest_group_for(0.5), Some(23));
    }

    #[test]
    fn threshold_above_one_is_unreachable() {
        assert_eq!(smallest_group_for(1.5), None);
        assert_eq!(smallest_group_for(0.0), Some(0));
    }

    #[test]
    fn curve_covers_range_and_highlight() {
        let curve = birthday_curve(1..=100);
        assert_eq!(curve.points().len(), 100);
        assert_eq!(curve.points()[0], (1, 0.0));
        assert_eq!(curve.highlight().0, 23);
        assert_eq!(curve.xy()[22], (23.0, curve.highlight().1));
    }
}
