//! Airtable connection configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_endpoint() -> String {
    String::from("https://api.airtable.com/v0")
}

/// Airtable caps `pageSize` at 100.
const fn default_page_size() -> u32 {
    100
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AirtableConfig {
    /// Personal access token.
    #[serde(default)]
    pub api_key: String,

    /// Base identifier (`appXXXXXXXXXXXXXX`).
    #[serde(default)]
    pub base_id: String,

    /// Table identifier (`tblXXXXXXXXXXXXXX`) or table name.
    #[serde(default)]
    pub table_id: String,

    /// REST API root, overridable for tests and proxies.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Records per page (1–100).
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_id: String::new(),
            table_id: String::new(),
            endpoint: default_endpoint(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AirtableConfig {
    /// Check if the Airtable config has the minimum required fields.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.base_id.is_empty() && !self.table_id.is_empty()
    }

    /// Reject out-of-range values the API would refuse.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `page_size` is outside 1–100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.page_size) {
            return Err(ConfigError::InvalidValue {
                field: "airtable.page_size".to_string(),
                reason: format!("must be between 1 and 100, got {}", self.page_size),
            });
        }
        Ok(())
    }
}
