//! Boundary validation for raw test inputs.
//!
//! The evaluators themselves stay permissive (unset answers default to pass,
//! supplied scores are trusted); range checks live here so the collector can
//! reject bad input before evaluation rather than baking validation into the
//! pure rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use locomo_core::models::locomo25::Locomo25;
use locomo_core::models::two_step::TwoStepTest;

use crate::thresholds::LOCOMO25_ITEM_MAX;

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub message: String,
}

/// Check every questionnaire item against the 0–4 rating range.
pub fn validate_locomo25(locomo25: &Locomo25) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (index, &score) in locomo25.items.iter().enumerate() {
        if score > LOCOMO25_ITEM_MAX {
            errors.push(ValidationError {
                field: format!("q{}", index + 1),
                value: f64::from(score),
                min: 0.0,
                max: f64::from(LOCOMO25_ITEM_MAX),
                message: format!(
                    "locomo25 item q{} score {} is outside range [0, {}]",
                    index + 1,
                    score,
                    LOCOMO25_ITEM_MAX,
                ),
            });
        }
    }
    errors
}

/// Check the two-step raw measurements for strict positivity.
pub fn validate_two_step(test: &TwoStepTest) -> Vec<ValidationError> {
    let fields = [
        ("distance1_cm", test.distance1_cm),
        ("distance2_cm", test.distance2_cm),
        ("height_cm", test.height_cm),
    ];

    let mut errors = Vec::new();
    for (field, value) in fields {
        if !value.is_finite() || value <= 0.0 {
            errors.push(ValidationError {
                field: field.to_string(),
                value,
                min: 0.0,
                max: f64::INFINITY,
                message: format!("two-step {field} must be positive, got {value}"),
            });
        }
    }
    errors
}
