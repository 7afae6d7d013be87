//! Evaluator roster, category labels, and id → name tables.
//!
//! These replace the hardcoded module-level tables of a typical dashboard
//! script: they are plain data, loaded once and handed to the extractor and
//! report builders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tally_core::lookup::NameLookup;

/// Category labels recognized inside feedback blobs.
fn default_categories() -> Vec<String> {
    [
        "State of development",
        "Momentum",
        "Management",
        "Market",
        "Team",
        "Pain",
        "Scalability",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterConfig {
    /// Evaluator names, in matching priority order.
    #[serde(default)]
    pub evaluators: Vec<String>,

    /// Category labels matched as `<Label>:` inside comments.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Startup `Id` → display name.
    #[serde(default)]
    pub startups: BTreeMap<String, String>,

    /// Founder linked-record id → display name.
    #[serde(default)]
    pub founders: BTreeMap<String, String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            evaluators: Vec::new(),
            categories: default_categories(),
            startups: BTreeMap::new(),
            founders: BTreeMap::new(),
        }
    }
}

impl RosterConfig {
    #[must_use]
    pub fn startup_lookup(&self) -> NameLookup {
        NameLookup::new(self.startups.clone())
    }

    #[must_use]
    pub fn founder_lookup(&self) -> NameLookup {
        NameLookup::new(self.founders.clone())
    }
}
