//! Per-test evaluators and the overall classification.
//!
//! Judgment criteria follow the JOA locomotive-syndrome risk tests: each
//! evaluator maps one test's raw answers to a [`RiskLevel`], and the overall
//! result takes the worst of the three.

use locomo_core::models::evaluation::{EvaluationResult, RiskLevel};
use locomo_core::models::locomo25::Locomo25;
use locomo_core::models::standing::StandingTest;
use locomo_core::models::two_step::TwoStepTest;

use crate::error::EngineError;
use crate::thresholds;

/// Evaluate the stand-up test.
///
/// Strict fall-through, first match wins: failing both-legs 40 cm is degree 3
/// regardless of any one-leg answer, then both-legs 20 cm, then one-leg
/// 40 cm. An unanswered height never triggers a fail branch.
pub fn evaluate_standing_test(test: &StandingTest) -> RiskLevel {
    if test.both_legs_40cm == Some(false) {
        return RiskLevel::Degree3;
    }
    if test.both_legs_20cm == Some(false) {
        return RiskLevel::Degree2;
    }
    if test.one_leg_40cm == Some(false) {
        return RiskLevel::Degree1;
    }
    RiskLevel::None
}

/// Evaluate the two-step test.
///
/// A caller-supplied `score` takes precedence, unconditionally; it is never
/// reconciled against the raw distances. Only when the score must be derived
/// here does the height get checked, so a non-positive height cannot leak a
/// non-finite score into the threshold comparison.
pub fn evaluate_two_step_test(test: &TwoStepTest) -> Result<RiskLevel, EngineError> {
    let score = match test.score {
        Some(score) => score,
        None => {
            if test.height_cm <= 0.0 {
                return Err(EngineError::InvalidInput(format!(
                    "two-step height must be positive, got {}",
                    test.height_cm
                )));
            }
            test.better_distance_cm / test.height_cm
        }
    };
    Ok(two_step_level(score))
}

/// Risk level for a bare two-step score.
pub fn two_step_level(score: f64) -> RiskLevel {
    if score < thresholds::TWO_STEP_DEGREE3_UPPER {
        RiskLevel::Degree3
    } else if score < thresholds::TWO_STEP_DEGREE2_UPPER {
        RiskLevel::Degree2
    } else if score < thresholds::TWO_STEP_DEGREE1_UPPER {
        RiskLevel::Degree1
    } else {
        RiskLevel::None
    }
}

/// Evaluate the 25-item questionnaire.
///
/// The total is re-derived from the items; a stored total is ignored so it
/// can never be double counted.
pub fn evaluate_locomo25(locomo25: &Locomo25) -> RiskLevel {
    locomo25_level(Locomo25::total_of(&locomo25.items))
}

/// Risk level for a bare questionnaire total.
pub fn locomo25_level(total: u16) -> RiskLevel {
    if total >= thresholds::LOCOMO25_DEGREE3_MIN {
        RiskLevel::Degree3
    } else if total >= thresholds::LOCOMO25_DEGREE2_MIN {
        RiskLevel::Degree2
    } else if total >= thresholds::LOCOMO25_DEGREE1_MIN {
        RiskLevel::Degree1
    } else {
        RiskLevel::None
    }
}

/// Combine the three per-test levels. Worst-of-three: a single severe test
/// dominates the overall label, with no weighting or partial credit.
pub fn evaluate_overall(
    standing: RiskLevel,
    two_step: RiskLevel,
    locomo25: RiskLevel,
) -> EvaluationResult {
    let worst = standing.max(two_step).max(locomo25);
    EvaluationResult {
        standing_risk_level: standing,
        two_step_risk_level: two_step,
        locomo25_risk_level: locomo25,
        total_risk: worst.label(),
    }
}

/// Run all three evaluators and combine them.
pub fn evaluate_check(
    standing: &StandingTest,
    two_step: &TwoStepTest,
    locomo25: &Locomo25,
) -> Result<EvaluationResult, EngineError> {
    let standing_level = evaluate_standing_test(standing);
    let two_step_level = evaluate_two_step_test(two_step)?;
    let locomo25_level = evaluate_locomo25(locomo25);
    Ok(evaluate_overall(standing_level, two_step_level, locomo25_level))
}
