//! locomo-engine
//!
//! Scoring rules for the three locomotive-syndrome risk tests. Pure
//! functions over locomo-core types — no I/O, no state; every call
//! recomputes from its arguments and the fixed threshold tables.

pub mod error;
pub mod evaluate;
pub mod reference;
pub mod thresholds;
pub mod validate;
