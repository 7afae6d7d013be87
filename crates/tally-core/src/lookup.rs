//! Immutable id → display-name tables and founder link resolution.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// Static identifier → display-name table (startups, founders).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct NameLookup(BTreeMap<String, String>);

impl NameLookup {
    #[must_use]
    pub const fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Display name for `id`, or `fallback` formatted with the id.
    ///
    /// `fallback` is a prefix such as `"ID"` or `"Startup"`; the result is
    /// `"{fallback} {id}"` when the id is unknown.
    #[must_use]
    pub fn label_or(&self, id: &str, fallback: &str) -> String {
        self.get(id)
            .map_or_else(|| format!("{fallback} {id}"), str::to_string)
    }

    /// Find the id whose display name matches `name`, ignoring case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        self.0
            .iter()
            .find(|(_, display)| display.to_lowercase() == needle)
            .map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for NameLookup {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reference to a founder: a linked-record id or a raw name string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FounderLink {
    Record(String),
    Raw(String),
}

impl FounderLink {
    #[must_use]
    pub fn from_value(value: &FieldValue) -> Self {
        value.record_id().map_or_else(
            || Self::Raw(value.display_string()),
            |id| Self::Record(id.to_string()),
        )
    }

    /// Resolve against the founder table; unknown references resolve to
    /// themselves.
    #[must_use]
    pub fn resolve(&self, founders: &NameLookup) -> String {
        let key = match self {
            Self::Record(id) | Self::Raw(id) => id,
        };
        founders.get(key).unwrap_or(key).to_string()
    }
}
