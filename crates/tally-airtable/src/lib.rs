//! # tally-airtable
//!
//! Read-only loader for the evaluation table.
//!
//! Pages through `GET {endpoint}/{base}/{table}` with a bearer token and
//! turns each record into an [`EvaluationRow`]. Pages are fetched one after
//! another; nothing is retried or cached.

mod error;
mod http;
pub mod records;

pub use error::AirtableError;
pub use http::DEFAULT_RETRY_AFTER_SECS;

use std::time::Duration;

use tally_config::AirtableConfig;
use tally_core::EvaluationRow;

use crate::http::check_response;
use crate::records::{AirtableRecord, ListRecordsResponse};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one Airtable table.
pub struct AirtableClient {
    http: reqwest::Client,
    endpoint: String,
    base_id: String,
    table_id: String,
    api_key: String,
    page_size: u32,
}

impl AirtableClient {
    /// Build a client from the `[airtable]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError::NotConfigured`] when the API key, base id or
    /// table id is empty, and [`AirtableError::Http`] if the HTTP client
    /// cannot be built.
    pub fn from_config(config: &AirtableConfig) -> Result<Self, AirtableError> {
        let missing: Vec<&str> = [
            ("api_key", &config.api_key),
            ("base_id", &config.base_id),
            ("table_id", &config.table_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(AirtableError::NotConfigured {
                missing: missing.join(", "),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("tally/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            base_id: config.base_id.clone(),
            table_id: config.table_id.clone(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
        })
    }

    /// URL for one page of the list-records endpoint.
    fn page_url(&self, offset: Option<&str>) -> String {
        let mut url = format!(
            "{}/{}/{}?pageSize={}",
            self.endpoint,
            urlencoding::encode(&self.base_id),
            urlencoding::encode(&self.table_id),
            self.page_size
        );
        if let Some(offset) = offset {
            url.push_str("&offset=");
            url.push_str(&urlencoding::encode(offset));
        }
        url
    }

    async fn fetch_page(&self, offset: Option<&str>) -> Result<ListRecordsResponse, AirtableError> {
        let url = self.page_url(offset);
        tracing::debug!(%url, "fetching Airtable page");
        let resp = check_response(
            self.http
                .get(&url)
                .bearer_auth(&self.api_key)
                .send()
                .await?,
        )
        .await?;

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| AirtableError::Parse(e.to_string()))
    }

    /// Fetch every record in the table, following `offset` cursors.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if any page request fails, is rate limited,
    /// returns a non-success status, or cannot be parsed.
    pub async fn list_records(&self) -> Result<Vec<AirtableRecord>, AirtableError> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;
        loop {
            let page = self.fetch_page(offset.as_deref()).await?;
            records.extend(page.records);
            match page.offset {
                Some(next) if offset.as_deref() != Some(next.as_str()) => offset = Some(next),
                Some(next) => {
                    tracing::warn!(offset = %next, "Airtable repeated a page offset, stopping");
                    break;
                }
                None => break,
            }
        }
        tracing::debug!(count = records.len(), "fetched Airtable records");
        Ok(records)
    }

    /// Fetch the table as evaluation rows. Rows without an `Id` are dropped.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_records`].
    pub async fn load_rows(&self) -> Result<Vec<EvaluationRow>, AirtableError> {
        Ok(records::into_rows(self.list_records().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> AirtableConfig {
        AirtableConfig {
            api_key: "pat123".into(),
            base_id: "appBase".into(),
            table_id: "Startup Evaluations".into(),
            ..AirtableConfig::default()
        }
    }

    #[test]
    fn page_url_encodes_segments_and_offset() {
        let client = AirtableClient::from_config(&config()).unwrap();
        assert_eq!(
            client.page_url(None),
            "https://api.airtable.com/v0/appBase/Startup%20Evaluations?pageSize=100"
        );
        assert_eq!(
            client.page_url(Some("itr/rec1")),
            "https://api.airtable.com/v0/appBase/Startup%20Evaluations?pageSize=100&offset=itr%2Frec1"
        );
    }

    #[test]
    fn custom_endpoint_trailing_slash_is_trimmed() {
        let mut config = config();
        config.endpoint = "http://localhost:8080/v0/".into();
        config.page_size = 10;
        let client = AirtableClient::from_config(&config).unwrap();
        assert_eq!(
            client.page_url(None),
            "http://localhost:8080/v0/appBase/Startup%20Evaluations?pageSize=10"
        );
    }

    #[test]
    fn missing_credentials_are_reported() {
        let mut config = config();
        config.api_key.clear();
        config.table_id = "  ".into();
        match AirtableClient::from_config(&config) {
            Err(AirtableError::NotConfigured { missing }) => {
                assert_eq!(missing, "api_key, table_id");
            }
            Err(other) => panic!("expected NotConfigured, got {other:?}"),
            Ok(_) => panic!("expected NotConfigured, got a client"),
        }
    }

    #[tokio::test]
    #[ignore = "requires TALLY_AIRTABLE__* credentials and network access"]
    async fn live_table_loads() {
        let config = AirtableConfig {
            api_key: std::env::var("TALLY_AIRTABLE__API_KEY").unwrap_or_default(),
            base_id: std::env::var("TALLY_AIRTABLE__BASE_ID").unwrap_or_default(),
            table_id: std::env::var("TALLY_AIRTABLE__TABLE_ID").unwrap_or_default(),
            ..AirtableConfig::default()
        };
        let client = AirtableClient::from_config(&config).unwrap();
        let rows = client.load_rows().await.unwrap();
        assert!(rows.iter().all(|row| row.id.is_some()));
    }
}
