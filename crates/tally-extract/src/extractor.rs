//! The configured extractor: roster + labels + presentation options.

use std::collections::BTreeMap;

use tally_core::EvaluationRow;
use tally_core::feedback::{
    FeedbackRecord, FeedbackSegment, MentorFeedback, MentorGrouping, MentorRecords,
};
use tally_core::outcome::ParseOutcome;

use crate::category::{format_sections, split_categories};
use crate::error::ExtractError;
use crate::mentor::group_by_mentor;
use crate::roster::{CategoryLabels, EvaluatorRoster};
use crate::scores::records_from_row;

/// Default evaluator label for text with no recognized name.
pub const ANONYMOUS: &str = "Anonymous";

/// Turns raw feedback blobs into per-mentor, per-category feedback.
///
/// Build once per invocation from configuration and reuse for every blob.
#[derive(Debug, Clone)]
pub struct FeedbackExtractor {
    roster: EvaluatorRoster,
    labels: CategoryLabels,
    anonymous: String,
    annotate_scores: bool,
}

impl FeedbackExtractor {
    #[must_use]
    pub fn new(roster: EvaluatorRoster, labels: CategoryLabels) -> Self {
        Self {
            roster,
            labels,
            anonymous: ANONYMOUS.to_string(),
            annotate_scores: true,
        }
    }

    /// Compile the roster and labels from plain name lists.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Pattern`] if either list cannot be compiled.
    pub fn from_names<E, C>(evaluators: E, categories: C) -> Result<Self, ExtractError>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Ok(Self::new(
            EvaluatorRoster::new(evaluators)?,
            CategoryLabels::new(categories)?,
        ))
    }

    #[must_use]
    pub fn with_anonymous_label(mut self, label: impl Into<String>) -> Self {
        self.anonymous = label.into();
        self
    }

    /// Whether category headings carry the mentor's score, e.g. `**Market (3):**`.
    #[must_use]
    pub const fn with_score_annotations(mut self, annotate: bool) -> Self {
        self.annotate_scores = annotate;
        self
    }

    #[must_use]
    pub const fn roster(&self) -> &EvaluatorRoster {
        &self.roster
    }

    #[must_use]
    pub const fn labels(&self) -> &CategoryLabels {
        &self.labels
    }

    /// Split a blob by evaluator without category processing.
    #[must_use]
    pub fn group(&self, raw_text: &str) -> MentorGrouping {
        group_by_mentor(raw_text, &self.roster, &self.anonymous)
    }

    /// Mentor scores from a row's score fields, names mapped to the roster.
    #[must_use]
    pub fn mentor_scores(
        &self,
        row: &EvaluationRow,
        score_fields: &BTreeMap<String, String>,
    ) -> ParseOutcome<MentorRecords> {
        records_from_row(row, score_fields, Some(&self.roster))
    }

    /// Extract structured feedback for every evaluator segment in `raw_text`.
    #[must_use]
    pub fn extract(&self, raw_text: &str, scores: &MentorRecords) -> Vec<MentorFeedback> {
        self.extract_with_preamble(raw_text, scores).1
    }

    /// Like [`Self::extract`], also returning the text before the first name.
    #[must_use]
    pub fn extract_with_preamble(
        &self,
        raw_text: &str,
        scores: &MentorRecords,
    ) -> (Option<String>, Vec<MentorFeedback>) {
        let grouping = self.group(raw_text);
        let feedback = self.feedback_for(grouping.segments, scores);
        (grouping.preamble, feedback)
    }

    /// Category-split and format already grouped segments.
    #[must_use]
    pub fn feedback_for(
        &self,
        segments: Vec<FeedbackSegment>,
        scores: &MentorRecords,
    ) -> Vec<MentorFeedback> {
        segments
            .into_iter()
            .map(|segment| {
                let mut sections = split_categories(&segment.text, &self.labels);
                if self.annotate_scores {
                    for section in &mut sections {
                        section.score = section
                            .label
                            .as_deref()
                            .and_then(|label| scores.score(&segment.mentor, label));
                    }
                }
                let formatted = format_sections(&sections);
                MentorFeedback {
                    mentor: segment.mentor,
                    sections,
                    formatted,
                }
            })
            .collect()
    }

    /// Flatten [`Self::extract`] into `(evaluator, category, score, comment)` records.
    ///
    /// A preamble comes first, attributed to the anonymous label.
    #[must_use]
    pub fn records(&self, raw_text: &str, scores: &MentorRecords) -> Vec<FeedbackRecord> {
        let (preamble, feedback) = self.extract_with_preamble(raw_text, scores);
        let leading = preamble.map(|comment| FeedbackRecord {
            evaluator: self.anonymous.clone(),
            category: None,
            score: None,
            comment,
        });
        leading
            .into_iter()
            .chain(feedback.into_iter().flat_map(|feedback| {
                let mentor = feedback.mentor;
                feedback
                    .sections
                    .into_iter()
                    .map(move |section| FeedbackRecord {
                        evaluator: mentor.clone(),
                        category: section.label,
                        score: section.score,
                        comment: section.body,
                    })
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> FeedbackExtractor {
        FeedbackExtractor::from_names(
            ["Sean Cook", "Ana Lozano"],
            ["State of development", "Momentum", "Market"],
        )
        .unwrap()
    }

    #[test]
    fn formats_each_mentor_segment() {
        let feedback = extractor().extract(
            "Sean Cook State of development: Good Momentum: Weak",
            &MentorRecords::new(),
        );
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].mentor, "Sean Cook");
        assert_eq!(
            feedback[0].formatted,
            "**State of development:** Good\n\n**Momentum:** Weak"
        );
    }

    #[test]
    fn attaches_scores_when_annotating() {
        let mut scores = MentorRecords::new();
        scores.insert("Sean Cook", "Momentum", 2.0);
        let feedback = extractor().extract("Sean Cook Momentum: Weak Market: Big", &scores);
        assert_eq!(
            feedback[0].formatted,
            "**Momentum (2):** Weak\n\n**Market:** Big"
        );
        assert_eq!(feedback[0].sections[0].score, Some(2.0));
    }

    #[test]
    fn annotations_can_be_disabled() {
        let mut scores = MentorRecords::new();
        scores.insert("Sean Cook", "Momentum", 2.0);
        let feedback = extractor()
            .with_score_annotations(false)
            .extract("Sean Cook Momentum: Weak", &scores);
        assert_eq!(feedback[0].formatted, "**Momentum:** Weak");
        assert_eq!(feedback[0].sections[0].score, None);
    }

    #[test]
    fn records_flatten_sections() {
        let records = extractor().records(
            "Sean Cook Momentum: Weak Ana Lozano - Nice people",
            &MentorRecords::new(),
        );
        assert_eq!(
            records,
            vec![
                FeedbackRecord {
                    evaluator: "Sean Cook".into(),
                    category: Some("Momentum".into()),
                    score: None,
                    comment: "Weak".into(),
                },
                FeedbackRecord {
                    evaluator: "Ana Lozano".into(),
                    category: None,
                    score: None,
                    comment: "Nice people".into(),
                },
            ]
        );
    }

    #[test]
    fn custom_anonymous_label() {
        let feedback = extractor()
            .with_anonymous_label("Unattributed")
            .extract("Great traction", &MentorRecords::new());
        assert_eq!(feedback[0].mentor, "Unattributed");
        assert_eq!(feedback[0].formatted, "Great traction");
    }

    #[test]
    fn records_keep_preamble_as_anonymous_entry() {
        let records = extractor().records(
            "Overall strong founders. Sean Cook good pitch",
            &MentorRecords::new(),
        );
        assert_eq!(
            records,
            vec![
                FeedbackRecord {
                    evaluator: "Anonymous".into(),
                    category: None,
                    score: None,
                    comment: "Overall strong founders.".into(),
                },
                FeedbackRecord {
                    evaluator: "Sean Cook".into(),
                    category: None,
                    score: None,
                    comment: "good pitch".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_labels_keep_segment_text() {
        let feedback = extractor().extract("Sean Cook Momentum:", &MentorRecords::new());
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].formatted, "Momentum:");
        assert_eq!(feedback[0].sections.len(), 1);
        assert_eq!(feedback[0].sections[0].label, None);
    }

    #[test]
    fn preamble_returned_next_to_feedback() {
        let (preamble, feedback) =
            extractor().extract_with_preamble("Intro. Sean Cook", &MentorRecords::new());
        assert_eq!(preamble.as_deref(), Some("Intro."));
        assert!(feedback.is_empty());
    }
}
