//! One evaluated entity (startup) and read-only accessors over its fields.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fields;
use crate::value::{FieldValue, normalize_list};

/// A single row of the evaluation table.
///
/// Special values are stripped at construction, so a NaN cell and a missing
/// cell look the same to every accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationRow {
    /// Data-store record identifier (e.g. `recXXXXXXXXXXXXXX`).
    pub record_id: String,
    /// The table's own `Id` column rendered as a string, if present.
    pub id: Option<String>,
    pub fields: BTreeMap<String, FieldValue>,
}

impl EvaluationRow {
    /// Build a row from raw fields, dropping special values.
    #[must_use]
    pub fn new(record_id: impl Into<String>, mut fields: BTreeMap<String, FieldValue>) -> Self {
        fields.retain(|_, value| !value.is_special());
        let id = fields
            .get(fields::ID)
            .map(FieldValue::display_string)
            .filter(|id| !id.trim().is_empty());
        Self {
            record_id: record_id.into(),
            id,
            fields,
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Finite numeric value of `field`.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_f64)
    }

    /// Numeric value of `field`, treating missing as zero.
    #[must_use]
    pub fn number_or_zero(&self, field: &str) -> f64 {
        self.number(field).unwrap_or(0.0)
    }

    /// Normalized list value of `field`; missing is empty.
    #[must_use]
    pub fn list(&self, field: &str) -> Vec<FieldValue> {
        normalize_list(self.get(field))
    }

    /// List value of `field` rendered as strings.
    #[must_use]
    pub fn text_list(&self, field: &str) -> Vec<String> {
        self.list(field)
            .iter()
            .map(FieldValue::display_string)
            .collect()
    }

    /// First element of a list cell, or the scalar itself, as a string.
    ///
    /// Lookup fields arrive as one-element arrays; this unwraps them.
    #[must_use]
    pub fn first_text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            FieldValue::List(items) => items.first().map(FieldValue::display_string),
            other => Some(other.display_string()),
        }
    }

    /// All text in `field` joined into one string (list items separated by `, `).
    #[must_use]
    pub fn joined_text(&self, field: &str) -> String {
        self.text_list(field).join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(json: &str) -> EvaluationRow {
        let fields: BTreeMap<String, FieldValue> =
            serde_json::from_str(json).expect("fields should parse");
        EvaluationRow::new("rec1", fields)
    }

    #[test]
    fn id_is_stringified_without_decimal() {
        let r = row(r#"{"Id": 7, "Average RISK": 3.25}"#);
        assert_eq!(r.id.as_deref(), Some("7"));
        assert_eq!(r.number("Average RISK"), Some(3.25));
    }

    #[test]
    fn special_values_are_dropped() {
        let r = row(r#"{"Id": 2, "Average RISK": {"specialValue": "NaN"}}"#);
        assert!(r.get("Average RISK").is_none());
        assert_eq!(r.number_or_zero("Average RISK"), 0.0);
    }

    #[test]
    fn missing_id_is_none() {
        let r = row(r#"{"Average RISK": 1}"#);
        assert!(r.id.is_none());
    }

    #[test]
    fn first_text_unwraps_lookup_arrays() {
        let r = row(r#"{"HDD_Calls_Evaluator": ["Ana", "Bo"], "HDD_Calls_Notes": "solid"}"#);
        assert_eq!(r.first_text("HDD_Calls_Evaluator").as_deref(), Some("Ana"));
        assert_eq!(r.first_text("HDD_Calls_Notes").as_deref(), Some("solid"));
        assert_eq!(r.first_text("missing"), None);
    }

    #[test]
    fn empty_field_normalizes_to_empty_list() {
        let r = row(r#"{"RISK | Fields_Red": {"specialValue": "NaN"}}"#);
        assert!(r.list("RISK | Fields_Red").is_empty());
        assert!(r.text_list("RISK | Fields_Green").is_empty());
    }
}
