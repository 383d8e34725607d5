//! locomo-core
//!
//! Pure domain types and S3 key conventions for the locomotive-syndrome
//! check system. No AWS SDK dependency — this is the shared vocabulary
//! between the engine, storage, export, and the form frontend.

pub mod error;
pub mod models;
pub mod s3_keys;
