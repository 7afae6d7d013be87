//! Markup normalization for feedback blobs.
//!
//! Rich-text cells arrive with HTML line breaks and markdown or HTML
//! emphasis. Segmentation works on plain text with real newlines.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("line break pattern is valid"));

static EMPHASIS_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:b|strong|i|em)\s*>").expect("emphasis tag pattern is valid")
});

/// Convert line-break markup to `\n` and strip emphasis markers.
///
/// Handles `<br>`, `<br/>`, `<br />` in any case, CRLF line endings,
/// `**`/`__` markdown emphasis, and `<b>`, `<strong>`, `<i>`, `<em>` tags.
#[must_use]
pub fn normalize_markup(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = EMPHASIS_TAG.replace_all(&text, "");
    text.replace("**", "").replace("__", "")
}
