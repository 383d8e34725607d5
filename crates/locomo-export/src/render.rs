use serde::Serialize;
use tera::{Context, Tera};

use locomo_core::models::check::CheckRecord;
use locomo_core::models::evaluation::AgeAverageComparison;
use locomo_core::models::subject::Subject;

use crate::advice::{self, Advice};
use crate::error::ExportError;

/// Default plain-text report template (Jinja2 syntax).
pub const REPORT_TEMPLATE: &str = "\
LOCOMOTIVE SYNDROME CHECK — {{ check.check_date }}

Subject: {{ subject.name }} ({{ subject.age }}, {{ subject.height_cm }} cm)

Stand-up test   risk level {{ check.evaluation.standing_risk_level }}
Two-step test   risk level {{ check.evaluation.two_step_risk_level }}\
{% if check.two_step_test.score %} (score {{ check.two_step_test.score | round(precision=2) }}){% endif %}
Locomo25        risk level {{ check.evaluation.locomo25_risk_level }} (total {{ check.locomo25.total }})

Overall: {{ check.evaluation.total_risk }}

Age-band average two-step score: {{ comparison.average }}
Difference from average: {{ comparison.difference | round(precision=2) }} \
({% if comparison.is_below_average %}below{% else %}at or above{% endif %} average)

{{ advice.headline }}

{{ advice.body }}

Recommended: {{ advice.recommendation }}
";

#[derive(Serialize)]
struct ReportContext<'a> {
    subject: &'a Subject,
    check: &'a CheckRecord,
    comparison: &'a AgeAverageComparison,
    advice: &'static Advice,
}

/// Render a report from a custom template. The context variables are
/// `subject`, `check`, `comparison`, and `advice`.
pub fn render_report_with(
    template_name: &str,
    template_content: &str,
    subject: &Subject,
    check: &CheckRecord,
    comparison: &AgeAverageComparison,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = ReportContext {
        subject,
        check,
        comparison,
        advice: advice::advice_for(check.evaluation.total_risk),
    };
    let value = serde_json::to_value(&context)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the built-in plain-text report.
pub fn render_report(
    subject: &Subject,
    check: &CheckRecord,
    comparison: &AgeAverageComparison,
) -> Result<String, ExportError> {
    render_report_with("report.txt", REPORT_TEMPLATE, subject, check, comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use locomo_core::models::evaluation::{EvaluationResult, RiskLabel, RiskLevel};
    use locomo_core::models::locomo25::Locomo25;
    use locomo_core::models::standing::StandingTest;
    use locomo_core::models::subject::{Gender, OrganizationKind};
    use locomo_core::models::two_step::TwoStepTest;
    use uuid::Uuid;

    fn fixture() -> (Subject, CheckRecord, AgeAverageComparison) {
        let now: jiff::Timestamp = "2026-08-26T00:00:00Z".parse().unwrap();
        let subject = Subject {
            id: Uuid::new_v4(),
            name: "Hanako Example".to_string(),
            age: 72,
            gender: Gender::Female,
            height_cm: 155.0,
            organization_type: OrganizationKind::Medical,
            organization_name: "City Clinic".to_string(),
            consent_date: now,
            consent_version: "1.0".to_string(),
            created_at: now,
        };
        let check = CheckRecord {
            id: Uuid::new_v4(),
            subject_id: subject.id,
            check_date: jiff::civil::date(2026, 8, 26),
            standing_test: StandingTest {
                both_legs_40cm: Some(true),
                both_legs_20cm: Some(true),
                one_leg_40cm: Some(false),
                ..StandingTest::default()
            },
            two_step_test: TwoStepTest::from_trials(170.0, 175.0, 155.0),
            locomo25: Locomo25::new([0; 25]),
            evaluation: EvaluationResult {
                standing_risk_level: RiskLevel::Degree1,
                two_step_risk_level: RiskLevel::Degree1,
                locomo25_risk_level: RiskLevel::None,
                total_risk: RiskLabel::Degree1,
            },
            created_at: now,
        };
        let comparison = AgeAverageComparison {
            average: 1.33,
            difference: -0.2,
            is_below_average: true,
        };
        (subject, check, comparison)
    }

    #[test]
    fn report_renders_result_and_advice() {
        let (subject, check, comparison) = fixture();
        let report = render_report(&subject, &check, &comparison).unwrap();
        assert!(report.contains("Hanako Example"));
        assert!(report.contains("Overall: degree 1"));
        assert!(report.contains("below average"));
        assert!(report.contains("Locomotive syndrome, degree 1"));
    }

    #[test]
    fn bad_template_is_a_parse_error() {
        let (subject, check, comparison) = fixture();
        let err = render_report_with("bad", "{% if %}", &subject, &check, &comparison);
        assert!(matches!(err, Err(ExportError::TemplateParse(_))));
    }
}
