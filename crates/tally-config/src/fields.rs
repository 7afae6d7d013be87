//! Names of the program-specific feedback and mentor-score fields.
//!
//! The fixed columns (averages, flags, due diligence) live in
//! `tally_core::fields`. Free-text feedback blobs and per-category mentor
//! score columns differ between programs, so they are configured here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tally_core::enums::{Dimension, Flag};

/// A free-text feedback field and the heading it is shown under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedbackField {
    pub title: String,
    pub field: String,
}

fn default_feedback_fields() -> Vec<FeedbackField> {
    Dimension::ALL
        .into_iter()
        .flat_map(|dimension| {
            Flag::ALL.into_iter().map(move |flag| FeedbackField {
                title: format!("{} · {}", dimension.field_prefix(), flag.as_str()),
                field: format!("{} | Feedback_{}", dimension.field_prefix(), flag.as_str()),
            })
        })
        .collect()
}

fn default_score_fields() -> BTreeMap<String, String> {
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
    .map(|category| (category.to_string(), format!("Mentor Scores | {category}")))
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldsConfig {
    /// Feedback blob fields, in display order.
    #[serde(default = "default_feedback_fields")]
    pub feedback: Vec<FeedbackField>,

    /// Category → field holding comma-separated `"Name: score"` tokens.
    #[serde(default = "default_score_fields")]
    pub scores: BTreeMap<String, String>,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            feedback: default_feedback_fields(),
            scores: default_score_fields(),
        }
    }
}
