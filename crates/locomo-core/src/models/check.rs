use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::evaluation::EvaluationResult;
use crate::models::locomo25::Locomo25;
use crate::models::standing::StandingTest;
use crate::models::two_step::TwoStepTest;

/// A completed check: the raw answers to all three tests together with the
/// computed levels, persisted as one JSON object per check.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckRecord {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub check_date: jiff::civil::Date,
    pub standing_test: StandingTest,
    pub two_step_test: TwoStepTest,
    pub locomo25: Locomo25,
    pub evaluation: EvaluationResult,
    pub created_at: jiff::Timestamp,
}
