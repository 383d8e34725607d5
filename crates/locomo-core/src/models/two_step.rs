use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Two-step stride test: two measured stride lengths and the subject's
/// height, all in centimeters.
///
/// `score` is the two-step value, `better_distance_cm / height_cm`. When a
/// caller supplies it, the evaluator uses it as-is and never reconciles it
/// against the raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TwoStepTest {
    pub distance1_cm: f64,
    pub distance2_cm: f64,
    pub height_cm: f64,
    /// Best of the two trials.
    pub better_distance_cm: f64,
    pub score: Option<f64>,
}

impl TwoStepTest {
    /// Build a record from the raw trial measurements, deriving the better
    /// distance and, when the height is positive, the score.
    pub fn from_trials(distance1_cm: f64, distance2_cm: f64, height_cm: f64) -> Self {
        let better_distance_cm = distance1_cm.max(distance2_cm);
        let score = (height_cm > 0.0).then(|| better_distance_cm / height_cm);
        Self {
            distance1_cm,
            distance2_cm,
            height_cm,
            better_distance_cm,
            score,
        }
    }
}
