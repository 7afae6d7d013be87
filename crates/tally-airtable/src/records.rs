//! Wire types for Airtable's list-records endpoint.

use std::collections::BTreeMap;

use serde::Deserialize;
use tally_core::{EvaluationRow, FieldValue};

/// One page of `GET /v0/{base}/{table}`.
#[derive(Debug, Deserialize)]
pub struct ListRecordsResponse {
    #[serde(default)]
    pub records: Vec<AirtableRecord>,
    /// Cursor for the next page; absent on the last page.
    #[serde(default)]
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirtableRecord {
    pub id: String,
    #[serde(rename = "createdTime", default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl AirtableRecord {
    #[must_use]
    pub fn into_row(self) -> EvaluationRow {
        EvaluationRow::new(self.id, self.fields)
    }
}

/// Convert records to rows, dropping those without an `Id` field.
#[must_use]
pub fn into_rows(records: Vec<AirtableRecord>) -> Vec<EvaluationRow> {
    records
        .into_iter()
        .map(AirtableRecord::into_row)
        .filter(|row| {
            if row.id.is_none() {
                tracing::debug!(record_id = %row.record_id, "dropping record without Id");
            }
            row.id.is_some()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "records": [
            {
                "id": "rec001",
                "createdTime": "2025-03-01T10:00:00.000Z",
                "fields": {
                    "Id": 2,
                    "Number of Reviews": 4,
                    "Average RISK": 3.25,
                    "Average Reward": {"specialValue": "NaN"},
                    "RISK | Fields_Red": ["Momentum", "Market"],
                    "Founders": ["reckEp7yXcc5kUzw4"],
                    "original logo": [
                        {"id": "att1", "url": "https://cdn.example/logo.png", "filename": "logo.png", "type": "image/png"}
                    ]
                }
            },
            {
                "id": "rec002",
                "createdTime": "2025-03-01T10:05:00.000Z",
                "fields": {"Number of Reviews": 1}
            },
            {
                "id": "rec003",
                "fields": {"Id": "7"}
            }
        ],
        "offset": "itrNext/rec003"
    }"#;

    #[test]
    fn parses_page_with_offset() {
        let page: ListRecordsResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(page.records.len(), 3);
        assert_eq!(page.offset.as_deref(), Some("itrNext/rec003"));
        assert_eq!(
            page.records[0].created_time.as_deref(),
            Some("2025-03-01T10:00:00.000Z")
        );
    }

    #[test]
    fn rows_drop_special_values_and_missing_ids() {
        let page: ListRecordsResponse = serde_json::from_str(FIXTURE).unwrap();
        let rows = into_rows(page.records);

        let ids: Vec<_> = rows.iter().map(|r| r.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("2"), Some("7")]);

        let first = &rows[0];
        assert_eq!(first.record_id, "rec001");
        assert_eq!(first.number("Average RISK"), Some(3.25));
        assert!(first.get("Average Reward").is_none());
        assert_eq!(first.text_list("RISK | Fields_Red"), vec!["Momentum", "Market"]);
    }

    #[test]
    fn last_page_has_no_offset() {
        let page: ListRecordsResponse = serde_json::from_str(r#"{"records": []}"#).unwrap();
        assert!(page.records.is_empty());
        assert!(page.offset.is_none());
    }
}
