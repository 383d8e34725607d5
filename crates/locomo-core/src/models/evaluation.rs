use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordinal risk level for a single test. 0 = no impairment, 3 = most severe;
/// the derived `Ord` gives the strict 3 > 2 > 1 > 0 ordering.
///
/// Serialized as its ordinal (0–3), matching the persisted per-test columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RiskLevel {
    None = 0,
    Degree1 = 1,
    Degree2 = 2,
    Degree3 = 3,
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RiskLevel::None),
            1 => Ok(RiskLevel::Degree1),
            2 => Ok(RiskLevel::Degree2),
            3 => Ok(RiskLevel::Degree3),
            other => Err(format!("risk level out of range: {other}")),
        }
    }
}

impl RiskLevel {
    pub fn label(self) -> RiskLabel {
        match self {
            RiskLevel::None => RiskLabel::None,
            RiskLevel::Degree1 => RiskLabel::Degree1,
            RiskLevel::Degree2 => RiskLabel::Degree2,
            RiskLevel::Degree3 => RiskLabel::Degree3,
        }
    }
}

/// Human-facing label for an overall classification. Serialized as the label
/// string ("none", "degree 1", …), matching the persisted `total_risk` column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum RiskLabel {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "degree 1")]
    Degree1,
    #[serde(rename = "degree 2")]
    Degree2,
    #[serde(rename = "degree 3")]
    Degree3,
}

impl RiskLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLabel::None => "none",
            RiskLabel::Degree1 => "degree 1",
            RiskLabel::Degree2 => "degree 2",
            RiskLabel::Degree3 => "degree 3",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three per-test levels plus the overall classification, which is the
/// label of the worst of the three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationResult {
    #[ts(type = "number")]
    pub standing_risk_level: RiskLevel,
    #[ts(type = "number")]
    pub two_step_risk_level: RiskLevel,
    #[ts(type = "number")]
    pub locomo25_risk_level: RiskLevel,
    pub total_risk: RiskLabel,
}

/// Comparison of a two-step score against the population norm for the
/// subject's age band. Informational only; never feeds risk levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeAverageComparison {
    pub average: f64,
    /// Subject score minus the reference average.
    pub difference: f64,
    pub is_below_average: bool,
}
