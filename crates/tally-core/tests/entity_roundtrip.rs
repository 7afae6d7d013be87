//! Serde roundtrip and JsonSchema validation tests for the shared types.

use std::collections::BTreeMap;

use schemars::schema_for;
use tally_core::enums::*;
use tally_core::feedback::*;
use tally_core::lookup::{FounderLink, NameLookup};
use tally_core::outcome::{ParseOutcome, SkipReason, SkippedEntry};
use tally_core::{EvaluationRow, FieldValue, LinkedRecord};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    evaluation_row_roundtrip,
    EvaluationRow,
    EvaluationRow::new(
        "recA1",
        BTreeMap::from([
            ("Id".to_string(), FieldValue::Number(4.0)),
            ("Average RISK".to_string(), FieldValue::Number(2.75)),
            (
                "RISK | Fields_Red".to_string(),
                FieldValue::List(vec!["Momentum".into(), "Market".into()]),
            ),
            (
                "original logo".to_string(),
                FieldValue::List(vec![FieldValue::Record(LinkedRecord {
                    id: "att1".into(),
                    name: None,
                    url: Some("https://cdn.example/logo.png".into()),
                    filename: Some("logo.png".into()),
                    mime_type: Some("image/png".into()),
                })]),
            ),
        ]),
    )
);

roundtrip_and_validate!(
    mentor_grouping_roundtrip,
    MentorGrouping,
    MentorGrouping {
        preamble: Some("Summary first.".into()),
        segments: vec![FeedbackSegment {
            mentor: "Sean Cook".into(),
            text: "Momentum: Weak".into(),
        }],
    }
);

roundtrip_and_validate!(
    mentor_feedback_roundtrip,
    MentorFeedback,
    MentorFeedback {
        mentor: "Sean Cook".into(),
        sections: vec![CategorySection {
            label: Some("Momentum".into()),
            body: "Weak".into(),
            score: Some(2.0),
        }],
        formatted: "**Momentum (2):** Weak".into(),
    }
);

roundtrip_and_validate!(
    feedback_record_roundtrip,
    FeedbackRecord,
    FeedbackRecord {
        evaluator: "Anonymous".into(),
        category: None,
        score: None,
        comment: "Great team.".into(),
    }
);

roundtrip_and_validate!(tag_tally_roundtrip, TagTally, {
    let mut tally = TagTally::new();
    tally.record("Alice", Some(Tag::BonusStar));
    tally.record("Bob", Some(Tag::RedFlag));
    tally
});

roundtrip_and_validate!(mentor_records_roundtrip, MentorRecords, {
    let mut records = MentorRecords::new();
    records.insert("Sean Cook", "Momentum", 3.0);
    records.insert("Sean Cook", "Market", 2.5);
    records
});

roundtrip_and_validate!(
    parse_outcome_roundtrip,
    ParseOutcome<Vec<String>>,
    ParseOutcome::new(
        vec!["ok".to_string()],
        vec![SkippedEntry::new("malformed-entry", SkipReason::MissingSeparator)],
    )
);

roundtrip_and_validate!(
    founder_link_roundtrip,
    FounderLink,
    FounderLink::Record("reckEp7yXcc5kUzw4".into())
);

roundtrip_and_validate!(
    name_lookup_roundtrip,
    NameLookup,
    [("2".to_string(), "Heuristik".to_string())]
        .into_iter()
        .collect()
);

roundtrip_and_validate!(severity_roundtrip, Severity, Severity::Moderate);

#[test]
fn enums_serialize_snake_case() {
    assert_eq!(serde_json::to_string(&Tag::BonusStar).unwrap(), "\"bonus_star\"");
    assert_eq!(serde_json::to_string(&Flag::Yellow).unwrap(), "\"yellow\"");
    assert_eq!(serde_json::to_string(&Dimension::Reward).unwrap(), "\"reward\"");
}
