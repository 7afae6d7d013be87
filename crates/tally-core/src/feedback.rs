//! Feedback types produced by the extractor and the tag tally.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Tag;

// ── Segmentation ───────────────────────────────────────────────────

/// One evaluator's slice of a feedback blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeedbackSegment {
    pub mentor: String,
    pub text: String,
}

/// Result of splitting a blob by evaluator name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MentorGrouping {
    /// Text before the first recognized name, when there is any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
    pub segments: Vec<FeedbackSegment>,
}

/// A labeled (or unlabeled preamble) piece of one evaluator's comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategorySection {
    /// Category label as spelled in the roster; `None` for the preamble.
    pub label: Option<String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// All structured feedback from one evaluator inside one blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MentorFeedback {
    pub mentor: String,
    pub sections: Vec<CategorySection>,
    /// Markdown rendering of `sections`.
    pub formatted: String,
}

/// Flat `(evaluator, category, score, comment)` tuple for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeedbackRecord {
    pub evaluator: String,
    pub category: Option<String>,
    pub score: Option<f64>,
    pub comment: String,
}

// ── Mentor scores ──────────────────────────────────────────────────

/// Evaluator → category → numeric score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MentorRecords(BTreeMap<String, BTreeMap<String, f64>>);

impl MentorRecords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score; a later score for the same pair replaces the earlier.
    pub fn insert(&mut self, mentor: impl Into<String>, category: impl Into<String>, score: f64) {
        self.0
            .entry(mentor.into())
            .or_default()
            .insert(category.into(), score);
    }

    /// Score for a mentor/category pair, matching both names ignoring case.
    #[must_use]
    pub fn score(&self, mentor: &str, category: &str) -> Option<f64> {
        let mentor = mentor.to_lowercase();
        let category = category.to_lowercase();
        let (_, categories) = self
            .0
            .iter()
            .find(|(name, _)| name.to_lowercase() == mentor)?;
        categories
            .iter()
            .find(|(label, _)| label.to_lowercase() == category)
            .map(|(_, score)| *score)
    }

    #[must_use]
    pub fn categories(&self, mentor: &str) -> Option<&BTreeMap<String, f64>> {
        self.0.get(mentor)
    }

    pub fn mentors(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── Tag tally ──────────────────────────────────────────────────────

/// Per-founder counts of standout tags. Both counters are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TagCounts {
    #[serde(rename = "Bonus Star")]
    pub bonus_star: u32,
    #[serde(rename = "Red Flag")]
    pub red_flag: u32,
}

impl TagCounts {
    pub const fn add(&mut self, tag: Tag) {
        match tag {
            Tag::BonusStar => self.bonus_star += 1,
            Tag::RedFlag => self.red_flag += 1,
        }
    }
}

/// Founder → tag counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TagTally(BTreeMap<String, TagCounts>);

impl TagTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a founder (with zero counts) and count `tag` if recognized.
    pub fn record(&mut self, founder: &str, tag: Option<Tag>) {
        let counts = self.0.entry(founder.to_string()).or_default();
        if let Some(tag) = tag {
            counts.add(tag);
        }
    }

    #[must_use]
    pub fn get(&self, founder: &str) -> Option<&TagCounts> {
        self.0.get(founder)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagCounts)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
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

/// One aligned `(founder, evaluator, tag)` row of the unconventional-thinking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TagRow {
    pub founder: String,
    pub evaluator: String,
    pub tag: String,
}
