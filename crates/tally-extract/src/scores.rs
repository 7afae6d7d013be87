//! Mentor scores from `"Name: value"` fields.

use std::collections::BTreeMap;

use tally_core::EvaluationRow;
use tally_core::feedback::MentorRecords;
use tally_core::outcome::{ParseOutcome, SkipReason, SkippedEntry};

use crate::roster::EvaluatorRoster;

/// Parse a comma-separated list of `"Name: value"` tokens.
///
/// Blank tokens are ignored. Tokens without a `:` or with a non-numeric
/// value are skipped and reported. Names are mapped to their roster spelling
/// when `roster` knows them.
#[must_use]
pub fn parse_score_field(
    raw: &str,
    roster: Option<&EvaluatorRoster>,
) -> ParseOutcome<Vec<(String, f64)>> {
    let mut outcome = ParseOutcome::<Vec<(String, f64)>>::default();

    for token in raw.split([',', '\n']).map(str::trim).filter(|t| !t.is_empty()) {
        let Some((name, value)) = token.split_once(':') else {
            outcome
                .skipped
                .push(SkippedEntry::new(token, SkipReason::MissingSeparator));
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            outcome
                .skipped
                .push(SkippedEntry::new(token, SkipReason::MissingSeparator));
            continue;
        }
        match value.trim().parse::<f64>() {
            Ok(score) if score.is_finite() => {
                let name = roster
                    .and_then(|r| r.canonical(name))
                    .unwrap_or(name)
                    .to_string();
                outcome.parsed.push((name, score));
            }
            _ => outcome
                .skipped
                .push(SkippedEntry::new(token, SkipReason::InvalidNumber)),
        }
    }

    outcome
}

/// Build evaluator → category → score from a row's score fields.
///
/// `score_fields` maps each category to the field that holds its tokens.
/// Missing fields contribute nothing.
#[must_use]
pub fn records_from_row(
    row: &EvaluationRow,
    score_fields: &BTreeMap<String, String>,
    roster: Option<&EvaluatorRoster>,
) -> ParseOutcome<MentorRecords> {
    let mut records = MentorRecords::new();
    let mut skipped = Vec::new();

    for (category, field) in score_fields {
        let raw = row.joined_text(field);
        if raw.is_empty() {
            continue;
        }
        let outcome = parse_score_field(&raw, roster);
        for entry in &outcome.skipped {
            tracing::debug!(field = %field, raw = %entry.raw, reason = ?entry.reason, "skipping score token");
        }
        for (mentor, score) in outcome.parsed {
            records.insert(mentor, category.clone(), score);
        }
        skipped.extend(outcome.skipped);
    }

    ParseOutcome::new(records, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tally_core::FieldValue;

    fn roster() -> EvaluatorRoster {
        EvaluatorRoster::new(["Sean Cook", "Ana Lozano"]).unwrap()
    }

    #[test]
    fn parses_tokens_and_canonicalizes_names() {
        let outcome = parse_score_field("sean cook: 3, Ana Lozano: 2.5", Some(&roster()));
        assert!(outcome.is_clean());
        assert_eq!(
            outcome.parsed,
            vec![("Sean Cook".to_string(), 3.0), ("Ana Lozano".to_string(), 2.5)]
        );
    }

    #[test]
    fn unknown_names_keep_their_spelling() {
        let outcome = parse_score_field("Guest Mentor: 4", Some(&roster()));
        assert_eq!(outcome.parsed, vec![("Guest Mentor".to_string(), 4.0)]);
    }

    #[test]
    fn malformed_tokens_are_skipped_with_reason() {
        let outcome = parse_score_field("Sean Cook 3, Ana Lozano: high, , : 2", None);
        assert!(outcome.parsed.is_empty());
        let reasons: Vec<_> = outcome.skipped.iter().map(|s| s.reason).collect();
        assert_eq!(
            reasons,
            vec![
                SkipReason::MissingSeparator,
                SkipReason::InvalidNumber,
                SkipReason::MissingSeparator,
            ]
        );
        assert_eq!(outcome.skipped[1].raw, "Ana Lozano: high");
    }

    #[test]
    fn non_finite_values_are_invalid() {
        let outcome = parse_score_field("Sean Cook: NaN", None);
        assert!(outcome.parsed.is_empty());
        assert_eq!(outcome.skipped[0].reason, SkipReason::InvalidNumber);
    }

    #[test]
    fn records_collect_each_category_field() {
        let fields = BTreeMap::from([
            (
                "Mentor Scores | Momentum".to_string(),
                FieldValue::Text("Sean Cook: 3, Ana Lozano: 2".into()),
            ),
            (
                "Mentor Scores | Market".to_string(),
                FieldValue::List(vec!["Sean Cook: 4".into(), "oops".into()]),
            ),
        ]);
        let row = EvaluationRow::new("rec1", fields);
        let score_fields = BTreeMap::from([
            ("Momentum".to_string(), "Mentor Scores | Momentum".to_string()),
            ("Market".to_string(), "Mentor Scores | Market".to_string()),
            ("Team".to_string(), "Mentor Scores | Team".to_string()),
        ]);

        let outcome = records_from_row(&row, &score_fields, Some(&roster()));
        assert_eq!(outcome.parsed.score("Sean Cook", "Momentum"), Some(3.0));
        assert_eq!(outcome.parsed.score("Sean Cook", "Market"), Some(4.0));
        assert_eq!(outcome.parsed.score("Ana Lozano", "Momentum"), Some(2.0));
        assert_eq!(outcome.parsed.score("Ana Lozano", "Team"), None);
        assert_eq!(outcome.skipped.len(), 1);
    }
}
