//! Matchers for evaluator names and category labels.

use std::collections::HashMap;

use regex::Regex;

use crate::error::ExtractError;
use crate::spans::Span;

/// Lowercased, whitespace-collapsed form used to map a matched slice back to
/// its canonical spelling.
fn match_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Escaped pattern for a multi-word name; any run of whitespace may sit
/// between words.
fn words_pattern(name: &str) -> String {
    name.split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

fn compile(pattern: &str) -> Result<Regex, ExtractError> {
    Ok(Regex::new(pattern)?)
}

/// Trim, drop empties, and deduplicate ignoring case. First spelling wins.
fn canonical_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
            (!name.is_empty() && seen.insert(name.to_lowercase())).then_some(name)
        })
        .collect()
}

/// A name ends where the text ends, at whitespace, or where a new
/// capitalized word begins (`"Sean CookState of development"`).
fn is_name_boundary(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || c.is_uppercase())
}

// ── Evaluators ─────────────────────────────────────────────────────

/// Ordered evaluator roster compiled for case-insensitive scanning.
#[derive(Debug, Clone)]
pub struct EvaluatorRoster {
    names: Vec<String>,
    keys: HashMap<String, usize>,
    /// Any roster name at any position; used to find candidate starts.
    candidates: Option<Regex>,
    /// One `\A`-anchored matcher per name, in roster order.
    anchored: Vec<Regex>,
}

impl EvaluatorRoster {
    /// Compile a roster. An empty roster is valid and never matches.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Pattern`] if a name produces an oversized
    /// pattern.
    pub fn new<I, S>(names: I) -> Result<Self, ExtractError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = canonical_names(names);
        let keys = names
            .iter()
            .enumerate()
            .map(|(i, name)| (match_key(name), i))
            .collect();

        let anchored = names
            .iter()
            .map(|name| compile(&format!(r"(?i)\A(?:{})", words_pattern(name))))
            .collect::<Result<Vec<_>, _>>()?;

        let candidates = if names.is_empty() {
            None
        } else {
            let alternation = names
                .iter()
                .map(|name| words_pattern(name))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile(&format!("(?i)(?:{alternation})"))?)
        };

        Ok(Self {
            names,
            keys,
            candidates,
            anchored,
        })
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Canonical roster spelling of `name`, ignoring case and spacing.
    #[must_use]
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.keys
            .get(&match_key(name))
            .map(|&i| self.names[i].as_str())
    }

    /// Every occurrence of a roster name, left to right, non-overlapping.
    ///
    /// At each position the first roster name (in roster order) that is
    /// followed by a boundary wins. A candidate that fails the boundary check
    /// is retried from the next character.
    #[must_use]
    pub fn find_spans(&self, text: &str) -> Vec<Span> {
        let Some(candidates) = &self.candidates else {
            return Vec::new();
        };

        let mut spans = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let Some(found) = candidates.find_at(text, pos) else {
                break;
            };
            let start = found.start();
            if let Some((end, name)) = self.match_at(text, start) {
                spans.push(Span::new(start, end, name));
                pos = end;
            } else {
                pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
        spans
    }

    fn match_at(&self, text: &str, start: usize) -> Option<(usize, &str)> {
        let rest = &text[start..];
        self.names
            .iter()
            .zip(&self.anchored)
            .find_map(|(name, matcher)| {
                let end = matcher.find(rest)?.end();
                is_name_boundary(&rest[end..]).then(|| (start + end, name.as_str()))
            })
    }
}

// ── Category labels ────────────────────────────────────────────────

/// Category labels compiled to find `<Label>:` headings.
#[derive(Debug, Clone)]
pub struct CategoryLabels {
    labels: Vec<String>,
    keys: HashMap<String, usize>,
    pattern: Option<Regex>,
}

impl CategoryLabels {
    /// Compile labels. Longer labels are tried first so that a label never
    /// loses to one of its own prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Pattern`] if a label produces an oversized
    /// pattern.
    pub fn new<I, S>(labels: I) -> Result<Self, ExtractError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = canonical_names(labels);
        let keys = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (match_key(label), i))
            .collect();

        let mut ordered: Vec<&String> = labels.iter().collect();
        ordered.sort_by_key(|label| std::cmp::Reverse(label.chars().count()));

        let pattern = if ordered.is_empty() {
            None
        } else {
            let alternation = ordered
                .iter()
                .map(|label| {
                    let body = words_pattern(label);
                    if label.starts_with(|c: char| c.is_alphanumeric()) {
                        format!(r"\b{body}")
                    } else {
                        body
                    }
                })
                .collect::<Vec<_>>()
                .join("|");
            Some(compile(&format!(r"(?i)(?:{alternation})\s*:"))?)
        };

        Ok(Self {
            labels,
            keys,
            pattern,
        })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Every `<Label>:` heading, left to right. Span labels carry the
    /// configured spelling.
    #[must_use]
    pub fn find_spans(&self, text: &str) -> Vec<Span> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };
        pattern
            .find_iter(text)
            .filter_map(|found| {
                let heading = found.as_str().trim_end_matches(':');
                let &i = self.keys.get(&match_key(heading))?;
                Some(Span::new(found.start(), found.end(), self.labels[i].clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roster() -> EvaluatorRoster {
        EvaluatorRoster::new(["Sean Cook", "Ana Lozano", "Aditya Malhotra"]).unwrap()
    }

    fn labels(spans: &[Span]) -> Vec<&str> {
        spans.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn finds_names_case_insensitively_with_canonical_spelling() {
        let spans = roster().find_spans("SEAN COOK said hi, then ana lozano agreed");
        assert_eq!(labels(&spans), vec!["Sean Cook", "Ana Lozano"]);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, 9);
    }

    #[test]
    fn name_followed_by_capital_is_a_boundary() {
        let text = "Sean CookState of development: Good";
        let spans = roster().find_spans(text);
        assert_eq!(labels(&spans), vec!["Sean Cook"]);
        assert_eq!(&text[spans[0].end..spans[0].end + 5], "State");
    }

    #[test]
    fn name_followed_by_lowercase_is_rejected() {
        assert!(roster().find_spans("Sean Cooking lessons").is_empty());
    }

    #[test]
    fn name_followed_by_punctuation_is_rejected() {
        assert!(roster().find_spans("Sean Cook: fine").is_empty());
        assert_eq!(roster().find_spans("Sean Cook : fine").len(), 1);
    }

    #[test]
    fn name_tolerates_extra_whitespace() {
        let spans = roster().find_spans("Aditya  Malhotra fine");
        assert_eq!(labels(&spans), vec!["Aditya Malhotra"]);
    }

    #[test]
    fn rejected_candidate_retries_later_in_text() {
        let spans = roster().find_spans("Sean Cooks and Sean Cook agree");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 15);
    }

    #[test]
    fn earlier_roster_name_wins_at_same_position() {
        let roster = EvaluatorRoster::new(["Ana", "Ana Lozano"]).unwrap();
        let spans = roster.find_spans("Ana Lozano: fine");
        assert_eq!(labels(&spans), vec!["Ana"]);
    }

    #[test]
    fn later_roster_name_used_when_earlier_fails_boundary() {
        let roster = EvaluatorRoster::new(["Ana Lo", "Ana Lozano"]).unwrap();
        let spans = roster.find_spans("Ana Lozano fine");
        assert_eq!(labels(&spans), vec!["Ana Lozano"]);
    }

    #[test]
    fn empty_roster_never_matches() {
        let roster = EvaluatorRoster::new(Vec::<String>::new()).unwrap();
        assert!(roster.is_empty());
        assert!(roster.find_spans("Sean Cook: hi").is_empty());
    }

    #[test]
    fn roster_deduplicates_ignoring_case() {
        let roster = EvaluatorRoster::new(["Sean Cook", "sean  cook", " "]).unwrap();
        assert_eq!(roster.names(), ["Sean Cook".to_string()]);
        assert_eq!(roster.canonical("SEAN COOK"), Some("Sean Cook"));
        assert_eq!(roster.canonical("Someone"), None);
    }

    #[test]
    fn names_with_regex_metacharacters_match_literally() {
        let roster = EvaluatorRoster::new(["J. Doe (Lead)"]).unwrap();
        assert_eq!(roster.find_spans("J. Doe (Lead) ok").len(), 1);
        assert!(roster.find_spans("JX Doe (Lead) ok").is_empty());
    }

    #[test]
    fn category_labels_prefer_longest() {
        let categories = CategoryLabels::new(["Market", "Market fit"]).unwrap();
        let spans = categories.find_spans("market fit: strong. Market: big");
        assert_eq!(labels(&spans), vec!["Market fit", "Market"]);
    }

    #[test]
    fn category_label_requires_colon_and_word_start() {
        let categories = CategoryLabels::new(["Team"]).unwrap();
        assert!(categories.find_spans("Team is strong").is_empty());
        assert!(categories.find_spans("Steam: hot").is_empty());
        assert_eq!(categories.find_spans("team : strong").len(), 1);
    }
}
