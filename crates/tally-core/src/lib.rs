//! # tally-core
//!
//! Core types and error types for Tally.
//!
//! This crate provides the foundational types shared across all Tally crates:
//! - Airtable cell values and normalization helpers
//! - `EvaluationRow`, one evaluated startup
//! - Feedback types produced by the extractor (segments, sections, records)
//! - `ParseOutcome`, which carries skipped entries next to parsed values
//! - Flag, dimension, tier, tag, and severity enums
//! - Immutable id → name lookup tables and founder links
//! - Well-known field names of the evaluation table
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod feedback;
pub mod fields;
pub mod lookup;
pub mod outcome;
pub mod row;
pub mod value;

pub use errors::CoreError;
pub use row::EvaluationRow;
pub use value::{FieldValue, LinkedRecord};
