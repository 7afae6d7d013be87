//! Everything a report builder reads besides the rows themselves.

use std::collections::BTreeMap;

use tally_config::{FeedbackField, TallyConfig};
use tally_core::lookup::NameLookup;
use tally_extract::{ExtractError, FeedbackExtractor};

/// Immutable lookups and the configured extractor, built once per run.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub startups: NameLookup,
    pub founders: NameLookup,
    pub extractor: FeedbackExtractor,
    pub feedback_fields: Vec<FeedbackField>,
    pub score_fields: BTreeMap<String, String>,
    pub no_feedback: String,
}

impl ReportContext {
    /// Build from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the evaluator roster or category labels
    /// cannot be compiled.
    pub fn from_config(config: &TallyConfig) -> Result<Self, ExtractError> {
        let extractor =
            FeedbackExtractor::from_names(&config.roster.evaluators, &config.roster.categories)?
                .with_anonymous_label(config.general.anonymous_label.clone())
                .with_score_annotations(config.general.annotate_scores);

        tracing::debug!(
            evaluators = extractor.roster().names().len(),
            categories = extractor.labels().labels().len(),
            startups = config.roster.startups.len(),
            "report context ready"
        );

        Ok(Self {
            startups: config.roster.startup_lookup(),
            founders: config.roster.founder_lookup(),
            extractor,
            feedback_fields: config.fields.feedback.clone(),
            score_fields: config.fields.scores.clone(),
            no_feedback: config.general.no_feedback_placeholder.clone(),
        })
    }
}
