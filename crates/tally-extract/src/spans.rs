//! Non-overlapping matches in a text and the pieces between them.
//!
//! Splitting is independent of how spans were found, so names and category
//! labels share one partition routine.

/// A located match: byte range plus the canonical label it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }
}

/// One span and the text running from its end to the next span (or the end
/// of the input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece<'t, 's> {
    pub span: &'s Span,
    pub body: &'t str,
}

/// A text cut at a sorted set of spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'t, 's> {
    /// Text before the first span.
    pub preamble: &'t str,
    pub pieces: Vec<Piece<'t, 's>>,
}

/// Cut `text` at `spans`.
///
/// Spans must be sorted by start and must not overlap. A span that starts
/// before the previous one ends is ignored.
#[must_use]
pub fn partition<'t, 's>(text: &'t str, spans: &'s [Span]) -> Partition<'t, 's> {
    let mut accepted: Vec<&Span> = Vec::with_capacity(spans.len());
    for span in spans {
        let after_previous = accepted.last().is_none_or(|prev| span.start >= prev.end);
        if after_previous && span.end <= text.len() && span.start <= span.end {
            accepted.push(span);
        }
    }

    let preamble = accepted.first().map_or(text, |first| &text[..first.start]);
    let pieces = accepted
        .iter()
        .enumerate()
        .map(|(i, span)| {
            let end = accepted.get(i + 1).map_or(text.len(), |next| next.start);
            Piece {
                span,
                body: &text[span.end..end],
            }
        })
        .collect();

    Partition { preamble, pieces }
}

/// Drop separator characters (`:`, `-`, whitespace) that follow a name.
#[must_use]
pub fn strip_leading_separators(text: &str) -> &str {
    text.trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
}
