//! Category segmentation inside one evaluator's comment.

use tally_core::feedback::CategorySection;

use crate::roster::CategoryLabels;
use crate::spans;

/// Split `text` at `<Label>:` headings.
///
/// Text before the first heading becomes an unlabeled section. Bodies are
/// trimmed and empty ones dropped. Without any heading, or when every
/// heading is empty, the text comes back untouched as a single unlabeled
/// section.
#[must_use]
pub fn split_categories(text: &str, labels: &CategoryLabels) -> Vec<CategorySection> {
    let found = labels.find_spans(text);
    if found.is_empty() {
        return vec![CategorySection {
            label: None,
            body: text.to_string(),
            score: None,
        }];
    }

    let parts = spans::partition(text, &found);
    let preamble = parts.preamble.trim();

    let mut sections = Vec::with_capacity(parts.pieces.len() + 1);
    if !preamble.is_empty() {
        sections.push(CategorySection {
            label: None,
            body: preamble.to_string(),
            score: None,
        });
    }
    sections.extend(parts.pieces.iter().filter_map(|piece| {
        let body = piece.body.trim();
        (!body.is_empty()).then(|| CategorySection {
            label: Some(piece.span.label.clone()),
            body: body.to_string(),
            score: None,
        })
    }));
    if sections.is_empty() {
        return vec![CategorySection {
            label: None,
            body: text.to_string(),
            score: None,
        }];
    }
    sections
}

/// Render sections as markdown.
///
/// Labeled sections become `**Label:** body`, or `**Label (score):** body`
/// when a score is attached. Blocks are joined by a blank line. A lone
/// unlabeled section renders as its body verbatim.
#[must_use]
pub fn format_sections(sections: &[CategorySection]) -> String {
    if let [CategorySection {
        label: None, body, ..
    }] = sections
    {
        return body.clone();
    }

    sections
        .iter()
        .map(|section| match (&section.label, section.score) {
            (Some(label), Some(score)) => format!("**{label} ({score}):** {}", section.body),
            (Some(label), None) => format!("**{label}:** {}", section.body),
            (None, _) => section.body.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
