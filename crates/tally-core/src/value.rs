//! Airtable cell values.
//!
//! The REST API returns each field as arbitrary JSON: numbers, strings,
//! booleans, arrays (multi-selects, lookups, linked records), attachment or
//! linked-record objects, and `{"specialValue": "NaN"}` for formula errors.
//! [`FieldValue`] models those shapes so the rest of the crate never has to
//! inspect raw `serde_json::Value`s.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single cell value as returned by the data store.
///
/// Variant order matters: `#[serde(untagged)]` tries them top to bottom, so
/// the special-value shape is checked before the generic record shape and
/// [`FieldValue::Other`] catches everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
    Special(SpecialValue),
    Record(LinkedRecord),
    Other(serde_json::Value),
}

/// Placeholder the API emits for computed cells without a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpecialValue {
    #[serde(rename = "specialValue")]
    pub special_value: String,
}

/// Linked-record reference or attachment object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LinkedRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl FieldValue {
    /// Whether the cell is a special value (NaN, formula error).
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(self, Self::Special(_))
    }

    /// Finite numeric value, if the cell holds one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Linked-record id, when the value is a record reference.
    #[must_use]
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Self::Record(record) => Some(&record.id),
            _ => None,
        }
    }

    /// Human-readable rendering of any value.
    ///
    /// Integral numbers print without a decimal point (`2`, not `2.0`) so
    /// numeric ids stringify the way the table shows them.
    #[must_use]
    pub fn display_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(Self::display_string)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Special(special) => special.special_value.clone(),
            Self::Record(record) => record.name.clone().unwrap_or_else(|| record.id.clone()),
            Self::Other(value) => value.to_string(),
        }
    }

    /// Normalize into a list of items.
    ///
    /// Lists yield their items, special values yield nothing, records and
    /// text yield themselves, and any other scalar yields its string form.
    #[must_use]
    pub fn to_list(&self) -> Vec<Self> {
        match self {
            Self::List(items) => items.iter().filter(|v| !v.is_special()).cloned().collect(),
            Self::Special(_) => Vec::new(),
            Self::Text(_) | Self::Record(_) => vec![self.clone()],
            other => vec![Self::Text(other.display_string())],
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Normalize an optional cell into a list; a missing cell is an empty list.
#[must_use]
pub fn normalize_list(value: Option<&FieldValue>) -> Vec<FieldValue> {
    value.map(FieldValue::to_list).unwrap_or_default()
}
