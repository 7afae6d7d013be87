//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_anonymous_label() -> String {
    String::from("Anonymous")
}

fn default_no_feedback_placeholder() -> String {
    String::from("No feedback provided.")
}

const fn default_annotate_scores() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Evaluator name used when no roster name is found in a blob.
    #[serde(default = "default_anonymous_label")]
    pub anonymous_label: String,

    /// Placeholder shown for a feedback field with no content.
    #[serde(default = "default_no_feedback_placeholder")]
    pub no_feedback_placeholder: String,

    /// Whether category headings carry the mentor's numeric score.
    #[serde(default = "default_annotate_scores")]
    pub annotate_scores: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            anonymous_label: default_anonymous_label(),
            no_feedback_placeholder: default_no_feedback_placeholder(),
            annotate_scores: default_annotate_scores(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.anonymous_label, "Anonymous");
        assert_eq!(config.no_feedback_placeholder, "No feedback provided.");
        assert!(config.annotate_scores);
    }
}
