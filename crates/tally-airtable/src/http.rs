//! Response status handling for Airtable calls.

use crate::error::AirtableError;

/// Wait suggested to the caller when a 429 carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 30;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`AirtableError::RateLimited`], reading
///   `Retry-After` in seconds (falls back to
///   [`DEFAULT_RETRY_AFTER_SECS`]).
/// - **Non-success status** → [`AirtableError::Api`] with status code and
///   response body.
///
/// There is no retry; the caller decides what to do with the error.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AirtableError> {
    if resp.status() == 429 {
        return Err(AirtableError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(AirtableError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
