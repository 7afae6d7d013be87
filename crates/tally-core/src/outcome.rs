//! Best-effort parse results.
//!
//! Parsers in Tally never fail on malformed entries; they skip them. A
//! [`ParseOutcome`] keeps the skipped raw input next to the parsed value so a
//! caller can log or surface it without changing the default behavior.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Why an entry was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The `": "` separator between name and value was missing.
    MissingSeparator,
    /// The value after the separator was not a number.
    InvalidNumber,
}

/// One raw entry a parser could not use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkippedEntry {
    pub raw: String,
    pub reason: SkipReason,
}

impl SkippedEntry {
    #[must_use]
    pub fn new(raw: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            raw: raw.into(),
            reason,
        }
    }
}

/// Parsed value plus the entries that were skipped on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParseOutcome<T> {
    pub parsed: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEntry>,
}

impl<T> ParseOutcome<T> {
    #[must_use]
    pub const fn new(parsed: T, skipped: Vec<SkippedEntry>) -> Self {
        Self { parsed, skipped }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Drop the diagnostics and keep the value.
    #[must_use]
    pub fn into_parsed(self) -> T {
        self.parsed
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        ParseOutcome {
            parsed: f(self.parsed),
            skipped: self.skipped,
        }
    }
}

impl<T: Default> Default for ParseOutcome<T> {
    fn default() -> Self {
        Self {
            parsed: T::default(),
            skipped: Vec::new(),
        }
    }
}
