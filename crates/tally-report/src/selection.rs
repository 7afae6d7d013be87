//! Choosing one startup out of the loaded rows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tally_core::lookup::NameLookup;
use tally_core::{CoreError, EvaluationRow};

/// A startup that can be opened with `tally startup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StartupEntry {
    pub id: String,
    pub name: String,
}

/// Numeric ids in numeric order, then anything else lexically.
fn id_order(id: &str) -> (bool, u64, &str) {
    id.parse::<u64>()
        .map_or((true, 0, id), |n| (false, n, id))
}

/// Row ids that have a display name, deduplicated and sorted numerically.
#[must_use]
pub fn selectable_ids(rows: &[EvaluationRow], startups: &NameLookup) -> Vec<String> {
    let mut ids: Vec<&str> = rows
        .iter()
        .filter_map(|r| r.id.as_deref())
        .filter(|id| startups.contains(id))
        .collect();
    ids.sort_by(|a, b| id_order(a).cmp(&id_order(b)));
    ids.dedup();
    ids.into_iter().map(str::to_string).collect()
}

/// [`selectable_ids`] paired with display names.
#[must_use]
pub fn selectable(rows: &[EvaluationRow], startups: &NameLookup) -> Vec<StartupEntry> {
    selectable_ids(rows, startups)
        .into_iter()
        .map(|id| StartupEntry {
            name: startups.label_or(&id, "Startup"),
            id,
        })
        .collect()
}

/// Find a row by exact `Id` or by startup name (ignoring case).
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] when neither matches a loaded row.
pub fn select<'a>(
    rows: &'a [EvaluationRow],
    key: &str,
    startups: &NameLookup,
) -> Result<&'a EvaluationRow, CoreError> {
    let key = key.trim();
    let by_id = |id: &str| rows.iter().find(|r| r.id.as_deref() == Some(id));

    by_id(key)
        .or_else(|| startups.find_by_name(key).and_then(by_id))
        .ok_or_else(|| CoreError::NotFound {
            entity_type: "startup".to_string(),
            id: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use pretty_assertions::assert_eq;
    use tally_core::FieldValue;

    fn row(id: &str) -> EvaluationRow {
        EvaluationRow::new(
            format!("rec{id}"),
            BTreeMap::from([("Id".to_string(), FieldValue::Text(id.into()))]),
        )
    }

    fn startups() -> NameLookup {
        [("2", "Heuristik"), ("10", "Metly"), ("3", "Quix"), ("x1", "Draft")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn ids_sort_numerically_and_skip_unknown() {
        let rows = vec![row("10"), row("3"), row("99"), row("x1"), row("2"), row("3")];
        assert_eq!(selectable_ids(&rows, &startups()), vec!["2", "3", "10", "x1"]);
    }

    #[test]
    fn select_by_id_or_name() {
        let rows = vec![row("2"), row("10")];
        assert_eq!(select(&rows, "10", &startups()).unwrap().record_id, "rec10");
        assert_eq!(select(&rows, "heuristik", &startups()).unwrap().record_id, "rec2");
    }

    #[test]
    fn select_unknown_is_not_found() {
        let rows = vec![row("2")];
        let err = select(&rows, "Quix", &startups()).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { ref id, .. } if id == "Quix"));
    }
}
