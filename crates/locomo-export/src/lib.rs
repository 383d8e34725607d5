//! locomo-export
//!
//! Outbound surfaces for a completed check: the best-effort spreadsheet
//! webhook sink, the fixed advisory/severity presentation data, and a
//! plain-text report renderer.

pub mod advice;
pub mod error;
pub mod render;
pub mod sheet;
