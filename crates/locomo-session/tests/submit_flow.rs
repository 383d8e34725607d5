//! Integration test for the end-to-end submit flow.
//!
//! Requires valid AWS credentials in the environment plus `LOCOMO_REGION`
//! and `LOCOMO_BUCKET` pointing at a writable test bucket.
//!
//! Run with: `cargo test -p locomo-session --test submit_flow -- --ignored`

use locomo_core::models::evaluation::RiskLabel;
use locomo_core::models::standing::StandingTest;
use locomo_core::models::subject::{Gender, OrganizationKind};
use locomo_session::config::CheckConfig;
use locomo_session::session::{BasicInfo, CheckSession, TwoStepTrials};
use locomo_storage::{client, records};

fn config_from_env() -> CheckConfig {
    CheckConfig {
        region: std::env::var("LOCOMO_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        bucket: std::env::var("LOCOMO_BUCKET").expect("LOCOMO_BUCKET must be set"),
        sheet_webhook_url: None,
    }
}

#[tokio::test]
#[ignore]
async fn submit_persists_subject_and_check() {
    let config = config_from_env();
    let s3 = client::build_client(&config.region).await;

    let mut session = CheckSession::new();
    session.record_consent("1.0", jiff::Timestamp::now());
    session.set_basic_info(BasicInfo {
        name: "Integration Test".to_string(),
        age: 65,
        gender: Gender::Other,
        height_cm: 160.0,
        organization_type: OrganizationKind::Medical,
        organization_name: "Test Clinic".to_string(),
    });
    session.set_standing(StandingTest {
        both_legs_40cm: Some(true),
        both_legs_20cm: Some(true),
        one_leg_40cm: Some(false),
        ..StandingTest::default()
    });
    session.set_two_step_trials(TwoStepTrials {
        distance1_cm: 180.0,
        distance2_cm: 185.0,
        height_cm: 160.0,
    });
    session.set_locomo25_answers([0; 25]);

    let outcome = session.submit(&s3, &config).await.expect("submit failed");
    assert_eq!(outcome.check.evaluation.total_risk, RiskLabel::Degree1);

    let loaded = records::load_check(&s3, &config.bucket, outcome.subject.id, outcome.check.id)
        .await
        .expect("check record not found after submit");
    assert_eq!(loaded.evaluation, outcome.check.evaluation);
    assert_eq!(loaded.locomo25.total, 0);

    let keys = records::list_checks(&s3, &config.bucket, outcome.subject.id)
        .await
        .expect("list failed");
    assert_eq!(keys.len(), 1);
}
