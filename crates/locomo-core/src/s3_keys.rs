//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the check-data bucket.

use uuid::Uuid;

pub fn subject(id: Uuid) -> String {
    format!("subjects/{id}.json")
}

pub const SUBJECTS_PREFIX: &str = "subjects/";

pub fn check(subject_id: Uuid, check_id: Uuid) -> String {
    format!("checks/{subject_id}/{check_id}.json")
}

pub fn subject_checks_prefix(subject_id: Uuid) -> String {
    format!("checks/{subject_id}/")
}

pub const CHECKS_PREFIX: &str = "checks/";
