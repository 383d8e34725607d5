use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Whether the check was administered through an employer or a clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrganizationKind {
    Company,
    Medical,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    /// Body height in centimeters, also the denominator of the two-step score.
    pub height_cm: f64,
    pub organization_type: OrganizationKind,
    pub organization_name: String,
    pub consent_date: jiff::Timestamp,
    pub consent_version: String,
    pub created_at: jiff::Timestamp,
}
