//! Splitting a blob into per-evaluator segments.

use tally_core::feedback::{FeedbackSegment, MentorGrouping};

use crate::markup::normalize_markup;
use crate::roster::EvaluatorRoster;
use crate::spans::{self, strip_leading_separators};

/// Group a raw feedback blob by evaluator.
///
/// The text is normalized first. Each recognized name owns the text up to
/// the next name, minus leading `:`/`-`/whitespace; empty segments are
/// dropped. Text before the first name becomes the `preamble`. When no name
/// is found the whole trimmed text is attributed to `anonymous`. Blank text
/// (empty or whitespace only, after normalization) yields no segments, not an
/// empty anonymous one.
#[must_use]
pub fn group_by_mentor(text: &str, roster: &EvaluatorRoster, anonymous: &str) -> MentorGrouping {
    let normalized = normalize_markup(text);
    let found = roster.find_spans(&normalized);

    if found.is_empty() {
        let trimmed = normalized.trim();
        if !trimmed.is_empty() {
            tracing::debug!(anonymous, "no evaluator names found, using anonymous segment");
        }
        let segments = (!trimmed.is_empty())
            .then(|| FeedbackSegment {
                mentor: anonymous.to_string(),
                text: trimmed.to_string(),
            })
            .into_iter()
            .collect();
        return MentorGrouping {
            preamble: None,
            segments,
        };
    }

    let parts = spans::partition(&normalized, &found);
    let preamble = Some(parts.preamble.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    let segments = parts
        .pieces
        .iter()
        .filter_map(|piece| {
            let body = strip_leading_separators(piece.body);
            (!body.trim().is_empty()).then(|| FeedbackSegment {
                mentor: piece.span.label.clone(),
                text: body.to_string(),
            })
        })
        .collect::<Vec<_>>();

    tracing::trace!(names = found.len(), segments = segments.len(), "grouped feedback");
    MentorGrouping { preamble, segments }
}
