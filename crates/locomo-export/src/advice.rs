//! Fixed presentation constants keyed by risk level.
//!
//! The engine never produces user-facing text; the result renderer picks a
//! severity color per level and one of these four advisory blocks per overall
//! classification.

use serde::Serialize;

use locomo_core::models::evaluation::{RiskLabel, RiskLevel};

/// Severity color for a risk level, as a CSS hex value.
pub fn severity_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::None => "#10b981",
        RiskLevel::Degree1 => "#fbbf24",
        RiskLevel::Degree2 => "#f97316",
        RiskLevel::Degree3 => "#ef4444",
    }
}

/// One advisory block: headline, explanation, recommended actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub headline: &'static str,
    pub body: &'static str,
    pub recommendation: &'static str,
}

const ADVICE_NONE: Advice = Advice {
    headline: "No sign of locomotive syndrome",
    body: "Your leg strength, stride, and self-reported function are all \
           within the healthy range for the test criteria.",
    recommendation: "Keep up your current level of activity. Regular walking, \
                     squats, and single-leg standing help maintain mobility as \
                     you age.",
};

const ADVICE_DEGREE1: Advice = Advice {
    headline: "Locomotive syndrome, degree 1",
    body: "Decline in locomotive function has begun. One or more tests show \
           early loss of muscle strength or balance.",
    recommendation: "Start locomotion training: daily squats and single-leg \
                     standing exercises. Review your diet for adequate protein \
                     and calcium.",
};

const ADVICE_DEGREE2: Advice = Advice {
    headline: "Locomotive syndrome, degree 2",
    body: "Decline in locomotive function is progressing. Everyday movements \
           such as climbing stairs or walking briskly may already be \
           difficult.",
    recommendation: "Continue locomotion training and consider consulting a \
                     medical professional, especially if you have pain in your \
                     joints or back.",
};

const ADVICE_DEGREE3: Advice = Advice {
    headline: "Locomotive syndrome, degree 3",
    body: "Decline in locomotive function has advanced to the point of \
           restricting social participation. Daily life is likely already \
           affected.",
    recommendation: "See an orthopedic specialist. Some underlying conditions \
                     of locomotive syndrome require diagnosis and treatment, \
                     not exercise alone.",
};

/// The fixed advisory block for an overall classification.
pub fn advice_for(total_risk: RiskLabel) -> &'static Advice {
    match total_risk {
        RiskLabel::None => &ADVICE_NONE,
        RiskLabel::Degree1 => &ADVICE_DEGREE1,
        RiskLabel::Degree2 => &ADVICE_DEGREE2,
        RiskLabel::Degree3 => &ADVICE_DEGREE3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_follow_severity() {
        assert_eq!(severity_color(RiskLevel::None), "#10b981");
        assert_eq!(severity_color(RiskLevel::Degree3), "#ef4444");
    }

    #[test]
    fn each_label_gets_its_own_advice() {
        let labels = [
            RiskLabel::None,
            RiskLabel::Degree1,
            RiskLabel::Degree2,
            RiskLabel::Degree3,
        ];
        let headlines: Vec<_> = labels.iter().map(|&l| advice_for(l).headline).collect();
        for (i, a) in headlines.iter().enumerate() {
            for b in &headlines[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
