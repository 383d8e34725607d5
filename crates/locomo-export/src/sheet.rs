//! Spreadsheet webhook sink.
//!
//! A completed check is flattened into one row and POSTed as JSON to a
//! configured webhook endpoint. The send is non-critical telemetry: failures
//! are logged and swallowed, and the result already shown to the subject is
//! never affected.

use serde::Serialize;

use locomo_core::models::check::CheckRecord;
use locomo_core::models::evaluation::{RiskLabel, RiskLevel};
use locomo_core::models::locomo25::LOCOMO25_ITEM_COUNT;
use locomo_core::models::subject::{Gender, Subject};

use crate::error::ExportError;

/// Flattened snapshot of one completed check, shaped for a spreadsheet row.
#[derive(Debug, Clone, Serialize)]
pub struct SheetRow {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub organization_name: String,

    pub both_legs_40cm: Option<bool>,
    pub both_legs_20cm: Option<bool>,
    pub both_legs_10cm: Option<bool>,
    pub one_leg_40cm: Option<bool>,
    pub one_leg_20cm: Option<bool>,
    pub one_leg_10cm: Option<bool>,

    pub two_step_better_distance_cm: f64,
    pub two_step_score: Option<f64>,

    pub locomo25_items: [u8; LOCOMO25_ITEM_COUNT],
    pub locomo25_total: u16,

    pub standing_risk_level: RiskLevel,
    pub two_step_risk_level: RiskLevel,
    pub locomo25_risk_level: RiskLevel,
    pub total_risk: RiskLabel,
}

impl SheetRow {
    pub fn from_check(subject: &Subject, check: &CheckRecord) -> Self {
        let standing = &check.standing_test;
        Self {
            name: subject.name.clone(),
            age: subject.age,
            gender: subject.gender,
            organization_name: subject.organization_name.clone(),
            both_legs_40cm: standing.both_legs_40cm,
            both_legs_20cm: standing.both_legs_20cm,
            both_legs_10cm: standing.both_legs_10cm,
            one_leg_40cm: standing.one_leg_40cm,
            one_leg_20cm: standing.one_leg_20cm,
            one_leg_10cm: standing.one_leg_10cm,
            two_step_better_distance_cm: check.two_step_test.better_distance_cm,
            two_step_score: check.two_step_test.score,
            locomo25_items: check.locomo25.items,
            locomo25_total: check.locomo25.total,
            standing_risk_level: check.evaluation.standing_risk_level,
            two_step_risk_level: check.evaluation.two_step_risk_level,
            locomo25_risk_level: check.evaluation.locomo25_risk_level,
            total_risk: check.evaluation.total_risk,
        }
    }
}

/// POST one row to the webhook endpoint.
pub fn post_row(url: &str, row: &SheetRow) -> Result<(), ExportError> {
    ureq::post(url).send_json(row)?;
    Ok(())
}

/// Best-effort send. Skips silently when no URL is configured; logs and
/// swallows failures. Callers run this detached from the result path.
pub fn send_best_effort(url: Option<&str>, row: &SheetRow) {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        tracing::debug!("sheet webhook not configured, skipping export");
        return;
    };

    match post_row(url, row) {
        Ok(()) => tracing::debug!("check exported to sheet webhook"),
        Err(e) => tracing::warn!(error = %e, "sheet export failed, continuing"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locomo_core::models::evaluation::EvaluationResult;
    use locomo_core::models::locomo25::Locomo25;
    use locomo_core::models::standing::StandingTest;
    use locomo_core::models::subject::OrganizationKind;
    use locomo_core::models::two_step::TwoStepTest;
    use uuid::Uuid;

    fn fixture() -> (Subject, CheckRecord) {
        let now: jiff::Timestamp = "2026-08-26T00:00:00Z".parse().unwrap();
        let subject = Subject {
            id: Uuid::new_v4(),
            name: "Taro Test".to_string(),
            age: 65,
            gender: Gender::Male,
            height_cm: 160.0,
            organization_type: OrganizationKind::Company,
            organization_name: "Acme".to_string(),
            consent_date: now,
            consent_version: "1.0".to_string(),
            created_at: now,
        };
        let two_step = TwoStepTest::from_trials(170.0, 180.0, 160.0);
        let check = CheckRecord {
            id: Uuid::new_v4(),
            subject_id: subject.id,
            check_date: jiff::civil::date(2026, 8, 26),
            standing_test: StandingTest {
                both_legs_40cm: Some(true),
                both_legs_20cm: Some(false),
                ..StandingTest::default()
            },
            two_step_test: two_step,
            locomo25: Locomo25::new([1; 25]),
            evaluation: EvaluationResult {
                standing_risk_level: RiskLevel::Degree2,
                two_step_risk_level: RiskLevel::Degree1,
                locomo25_risk_level: RiskLevel::Degree3,
                total_risk: RiskLabel::Degree3,
            },
            created_at: now,
        };
        (subject, check)
    }

    #[test]
    fn row_flattens_subject_and_check() {
        let (subject, check) = fixture();
        let row = SheetRow::from_check(&subject, &check);
        assert_eq!(row.name, "Taro Test");
        assert_eq!(row.both_legs_20cm, Some(false));
        assert_eq!(row.locomo25_total, 25);
        assert_eq!(row.total_risk, RiskLabel::Degree3);
    }

    #[test]
    fn row_serializes_levels_as_numbers_and_label_as_string() {
        let (subject, check) = fixture();
        let row = SheetRow::from_check(&subject, &check);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["standing_risk_level"], 2);
        assert_eq!(json["locomo25_risk_level"], 3);
        assert_eq!(json["total_risk"], "degree 3");
        assert_eq!(json["gender"], "male");
    }

    #[test]
    fn unconfigured_webhook_is_a_no_op() {
        let (subject, check) = fixture();
        let row = SheetRow::from_check(&subject, &check);
        send_best_effort(None, &row);
        send_best_effort(Some(""), &row);
    }
}
