//! locomo-session
//!
//! The collector-owned check session: explicit in-memory state accumulated
//! across wizard steps, plus the submit orchestration that validates,
//! evaluates, persists, and fires the best-effort export.

pub mod config;
pub mod error;
pub mod session;
