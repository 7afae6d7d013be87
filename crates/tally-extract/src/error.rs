//! Extractor error types.

/// Errors that can occur while compiling roster matchers.
///
/// Extraction itself never fails; malformed input degrades to best-effort
/// output.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to compile roster pattern: {0}")]
    Pattern(#[from] regex::Error),
}
