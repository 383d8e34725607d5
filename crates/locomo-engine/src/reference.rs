//! Age-bucketed two-step reference comparison.

use locomo_core::models::evaluation::AgeAverageComparison;

use crate::thresholds::{AGE_AVERAGE_TWO_STEP, AGE_AVERAGE_TWO_STEP_80_PLUS};

/// Reference two-step average for the subject's 5-year age band.
///
/// Linear ascending scan of the upper bounds. The published table starts at
/// 20–24; ages under 20 resolve to that first band because the source data
/// does not cover minors.
pub fn age_average_two_step(age: u32) -> f64 {
    for (upper, average) in AGE_AVERAGE_TWO_STEP {
        if age < upper {
            return average;
        }
    }
    AGE_AVERAGE_TWO_STEP_80_PLUS
}

/// Compare a two-step score against the age-band reference average.
pub fn compare_two_step_with_average(age: u32, score: f64) -> AgeAverageComparison {
    let average = age_average_two_step(age);
    AgeAverageComparison {
        average,
        difference: score - average,
        is_below_average: score < average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn bucket_lookup_follows_band_edges() {
        assert_eq!(age_average_two_step(20), 1.66);
        assert_eq!(age_average_two_step(24), 1.66);
        assert_eq!(age_average_two_step(25), 1.64);
        assert_eq!(age_average_two_step(44), 1.58);
        assert_eq!(age_average_two_step(45), 1.55);
        assert_eq!(age_average_two_step(65), 1.39);
        assert_eq!(age_average_two_step(79), 1.26);
        assert_eq!(age_average_two_step(80), 1.17);
        assert_eq!(age_average_two_step(95), 1.17);
    }

    #[test]
    fn averages_never_increase_with_age() {
        let mut prev = f64::INFINITY;
        for age in 20..=100 {
            let average = age_average_two_step(age);
            assert!(average <= prev, "average rose at age {age}");
            prev = average;
        }
    }

    #[test]
    fn under_20_falls_into_first_band() {
        assert_eq!(age_average_two_step(19), 1.66);
        assert_eq!(age_average_two_step(1), 1.66);
    }

    #[test]
    fn comparison_above_average() {
        let cmp = compare_two_step_with_average(65, 1.50);
        assert_eq!(cmp.average, 1.39);
        assert!((cmp.difference - 0.11).abs() < EPS);
        assert!(!cmp.is_below_average);
    }

    #[test]
    fn comparison_below_average() {
        let cmp = compare_two_step_with_average(65, 1.30);
        assert_eq!(cmp.average, 1.39);
        assert!((cmp.difference + 0.09).abs() < EPS);
        assert!(cmp.is_below_average);
    }

    #[test]
    fn score_equal_to_average_is_not_below() {
        let cmp = compare_two_step_with_average(65, 1.39);
        assert_eq!(cmp.difference, 0.0);
        assert!(!cmp.is_below_average);
    }
}
