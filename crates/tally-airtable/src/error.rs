//! Airtable loader error types.

use thiserror::Error;

/// Errors that can occur when fetching rows from Airtable.
#[derive(Debug, Error)]
pub enum AirtableError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Airtable returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by Airtable.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a list-records response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Airtable returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Credentials or table coordinates are missing.
    #[error("Airtable is not configured: missing {missing}")]
    NotConfigured { missing: String },
}
