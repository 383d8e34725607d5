//! locomo-storage
//!
//! Persistence of subjects and check records as JSON objects in S3.
//! Thin wrapper around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod objects;
pub mod records;
