use uuid::Uuid;

use locomo_core::models::check::CheckRecord;
use locomo_core::models::evaluation::{AgeAverageComparison, EvaluationResult};
use locomo_core::models::locomo25::{LOCOMO25_ITEM_COUNT, Locomo25};
use locomo_core::models::standing::StandingTest;
use locomo_core::models::subject::{Gender, OrganizationKind, Subject};
use locomo_core::models::two_step::TwoStepTest;
use locomo_engine::reference::compare_two_step_with_average;
use locomo_engine::{evaluate, validate};
use locomo_export::sheet::SheetRow;
use locomo_storage::records;

use crate::config::CheckConfig;
use crate::error::SessionError;

/// Consent captured before the wizard starts.
#[derive(Debug, Clone)]
pub struct Consent {
    pub agreed_at: jiff::Timestamp,
    pub version: String,
}

/// Basic info step of the wizard.
#[derive(Debug, Clone)]
pub struct BasicInfo {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub organization_type: OrganizationKind,
    pub organization_name: String,
}

/// Raw two-step trial measurements, before derivation.
#[derive(Debug, Clone, Copy)]
pub struct TwoStepTrials {
    pub distance1_cm: f64,
    pub distance2_cm: f64,
    pub height_cm: f64,
}

/// The pure result of evaluating a complete session, before persistence.
#[derive(Debug, Clone)]
pub struct EvaluatedCheck {
    pub standing_test: StandingTest,
    pub two_step_test: TwoStepTest,
    pub locomo25: Locomo25,
    pub evaluation: EvaluationResult,
    pub comparison: AgeAverageComparison,
}

/// Everything submit produced: the persisted records plus the comparison for
/// display.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub subject: Subject,
    pub check: CheckRecord,
    pub comparison: AgeAverageComparison,
}

/// In-memory state for one pass through the check wizard.
///
/// Each step records its answers here explicitly; nothing is read from
/// ambient storage. The engine only ever sees the assembled value records.
#[derive(Debug, Clone, Default)]
pub struct CheckSession {
    consent: Option<Consent>,
    basic_info: Option<BasicInfo>,
    standing: StandingTest,
    two_step: Option<TwoStepTrials>,
    locomo25_answers: [Option<u8>; LOCOMO25_ITEM_COUNT],
}

impl CheckSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_consent(&mut self, version: &str, agreed_at: jiff::Timestamp) {
        self.consent = Some(Consent {
            agreed_at,
            version: version.to_string(),
        });
    }

    pub fn set_basic_info(&mut self, info: BasicInfo) {
        self.basic_info = Some(info);
    }

    pub fn set_standing(&mut self, standing: StandingTest) {
        self.standing = standing;
    }

    pub fn set_two_step_trials(&mut self, trials: TwoStepTrials) {
        self.two_step = Some(trials);
    }

    pub fn set_locomo25_answer(&mut self, index: usize, score: u8) -> Result<(), SessionError> {
        if index >= LOCOMO25_ITEM_COUNT {
            return Err(SessionError::Incomplete("locomo25 item index out of range"));
        }
        self.locomo25_answers[index] = Some(score);
        Ok(())
    }

    pub fn set_locomo25_answers(&mut self, answers: [u8; LOCOMO25_ITEM_COUNT]) {
        self.locomo25_answers = answers.map(Some);
    }

    /// Names of the steps that still lack answers. The collector blocks
    /// submission until this is empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.consent.is_none() {
            missing.push("consent");
        }
        if self.basic_info.is_none() {
            missing.push("basic_info");
        }
        if self.standing == StandingTest::default() {
            missing.push("standing_test");
        }
        if self.two_step.is_none() {
            missing.push("two_step_test");
        }
        if self.locomo25_answers.iter().any(Option::is_none) {
            missing.push("locomo25");
        }
        missing
    }

    /// Run boundary validation and the evaluation engine over the assembled
    /// answers. Pure: no I/O, no state change.
    pub fn evaluate(&self) -> Result<EvaluatedCheck, SessionError> {
        if let Some(&field) = self.missing_fields().first() {
            return Err(SessionError::Incomplete(field));
        }

        // missing_fields() was empty, so the options are present.
        let Some(info) = self.basic_info.as_ref() else {
            return Err(SessionError::Incomplete("basic_info"));
        };
        let Some(trials) = self.two_step else {
            return Err(SessionError::Incomplete("two_step_test"));
        };

        let mut items = [0u8; LOCOMO25_ITEM_COUNT];
        for (slot, answer) in items.iter_mut().zip(self.locomo25_answers) {
            match answer {
                Some(score) => *slot = score,
                None => return Err(SessionError::Incomplete("locomo25")),
            }
        }
        let locomo25 = Locomo25::new(items);

        let two_step =
            TwoStepTest::from_trials(trials.distance1_cm, trials.distance2_cm, trials.height_cm);

        let mut errors = validate::validate_two_step(&two_step);
        errors.extend(validate::validate_locomo25(&locomo25));
        if !errors.is_empty() {
            return Err(SessionError::Validation(errors));
        }

        let evaluation = evaluate::evaluate_check(&self.standing, &two_step, &locomo25)?;

        // Validation guaranteed a positive height, so the score is derivable.
        let score = match two_step.score {
            Some(score) => score,
            None => two_step.better_distance_cm / two_step.height_cm,
        };
        let comparison = compare_two_step_with_average(info.age, score);

        Ok(EvaluatedCheck {
            standing_test: self.standing,
            two_step_test: two_step,
            locomo25,
            evaluation,
            comparison,
        })
    }

    /// Evaluate the session, persist the subject and check record, and fire
    /// the spreadsheet export detached from the result path.
    pub async fn submit(
        &self,
        client: &aws_sdk_s3::Client,
        config: &CheckConfig,
    ) -> Result<CheckOutcome, SessionError> {
        let evaluated = self.evaluate()?;

        let Some(info) = self.basic_info.as_ref() else {
            return Err(SessionError::Incomplete("basic_info"));
        };
        let Some(consent) = self.consent.as_ref() else {
            return Err(SessionError::Incomplete("consent"));
        };

        let now = jiff::Timestamp::now();
        let subject = Subject {
            id: Uuid::new_v4(),
            name: info.name.clone(),
            age: info.age,
            gender: info.gender,
            height_cm: info.height_cm,
            organization_type: info.organization_type,
            organization_name: info.organization_name.clone(),
            consent_date: consent.agreed_at,
            consent_version: consent.version.clone(),
            created_at: now,
        };
        let check = CheckRecord {
            id: Uuid::new_v4(),
            subject_id: subject.id,
            check_date: jiff::Zoned::now().date(),
            standing_test: evaluated.standing_test,
            two_step_test: evaluated.two_step_test,
            locomo25: evaluated.locomo25,
            evaluation: evaluated.evaluation,
            created_at: now,
        };

        records::save_subject(client, &config.bucket, &subject).await?;
        records::save_check(client, &config.bucket, &check).await?;

        // Best-effort telemetry, detached so a slow or failing webhook can
        // never delay or alter the outcome.
        let row = SheetRow::from_check(&subject, &check);
        let url = config.sheet_webhook_url.clone();
        let _detached = tokio::task::spawn_blocking(move || {
            locomo_export::sheet::send_best_effort(url.as_deref(), &row);
        });

        tracing::debug!(%check.id, total_risk = %check.evaluation.total_risk, "check submitted");

        Ok(CheckOutcome {
            subject,
            check,
            comparison: evaluated.comparison,
        })
    }
}
