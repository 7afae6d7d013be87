//! The per-startup evaluation report.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tally_core::EvaluationRow;
use tally_core::enums::{Dimension, Flag, Severity};
use tally_core::feedback::{MentorFeedback, TagRow, TagTally};
use tally_core::fields;
use tally_core::outcome::SkippedEntry;
use tally_extract::tags::{align_rows, tally_rows};

use crate::context::ReportContext;
use crate::round_to;

pub const NO_LOGO: &str = "No logo available for this startup.";
pub const NO_VOTES: &str = "No investability feedback yet for this startup.";
pub const UNKNOWN_EVALUATOR: &str = "Unknown";
pub const NO_NOTES: &str = "No notes provided.";
pub const NO_INTERPRETATION: &str = "No interpretation provided.";
pub const NO_RESULT: &str = "No result";

// ── Sections ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvestabilityVotes {
    pub yes: f64,
    pub no: f64,
    /// Yes share in percent, one decimal.
    pub yes_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,
}

/// Sub-dimensions an evaluator flagged for one dimension/colour pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FlagGroup {
    pub dimension: Dimension,
    pub flag: Flag,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HumanDueDiligence {
    pub average: Option<f64>,
    pub exceptional: bool,
    pub evaluator: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BurnoutReading {
    pub descriptor: String,
    pub severity: Severity,
}

impl BurnoutReading {
    fn from_descriptor(descriptor: String) -> Self {
        Self {
            severity: Severity::from_descriptor(&descriptor),
            descriptor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScientificDueDiligence {
    pub brs: String,
    pub grit: String,
    pub olbi_exhaustion: BurnoutReading,
    pub olbi_disengagement: BurnoutReading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UnconventionalThinking {
    pub rows: Vec<TagRow>,
    pub tally: TagTally,
}

/// Extracted feedback from one configured blob field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeedbackBlock {
    pub title: String,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
    pub entries: Vec<MentorFeedback>,
    /// Shown when the field yields neither entries nor a preamble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

// ── Report ─────────────────────────────────────────────────────────

/// Response from `tally startup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StartupReport {
    pub generated_at: DateTime<Utc>,
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub investability: Option<InvestabilityVotes>,
    pub average_risk: f64,
    pub average_reward: f64,
    pub risk_breakdown: Vec<CategoryScore>,
    pub reward_breakdown: Vec<CategoryScore>,
    pub flags: Vec<FlagGroup>,
    pub human_due_diligence: HumanDueDiligence,
    pub scientific_due_diligence: ScientificDueDiligence,
    pub unconventional_thinking: UnconventionalThinking,
    pub mentor_feedback: Vec<FeedbackBlock>,
    /// Score tokens that could not be parsed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<SkippedEntry>,
}

impl StartupReport {
    /// Shape one row into a report.
    #[must_use]
    pub fn build(row: &EvaluationRow, ctx: &ReportContext) -> Self {
        let id = row.id.clone().unwrap_or_default();
        let scores = ctx.extractor.mentor_scores(row, &ctx.score_fields);
        for entry in &scores.skipped {
            tracing::debug!(startup = %id, raw = %entry.raw, reason = ?entry.reason, "skipped mentor score");
        }

        let mentor_feedback = ctx
            .feedback_fields
            .iter()
            .map(|field| {
                let raw = row.joined_text(&field.field);
                let (preamble, entries) =
                    ctx.extractor.extract_with_preamble(&raw, &scores.parsed);
                let placeholder = (entries.is_empty() && preamble.is_none())
                    .then(|| ctx.no_feedback.clone());
                FeedbackBlock {
                    title: field.title.clone(),
                    field: field.field.clone(),
                    preamble,
                    placeholder,
                    entries,
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            name: ctx.startups.label_or(&id, "Startup"),
            logo_url: logo_url(row),
            investability: investability(row),
            average_risk: round_to(row.number_or_zero(fields::AVERAGE_RISK), 2),
            average_reward: round_to(row.number_or_zero(fields::AVERAGE_REWARD), 2),
            risk_breakdown: breakdown(row, &fields::RISK_BREAKDOWN),
            reward_breakdown: breakdown(row, &fields::REWARD_BREAKDOWN),
            flags: flags(row),
            human_due_diligence: human_due_diligence(row),
            scientific_due_diligence: scientific_due_diligence(row),
            unconventional_thinking: unconventional_thinking(row, ctx),
            mentor_feedback,
            diagnostics: scores.skipped,
            id,
        }
    }
}

// ── Section builders ───────────────────────────────────────────────

/// URL of the first `original logo` attachment; later attachments are ignored.
fn logo_url(row: &EvaluationRow) -> Option<String> {
    match row.list(fields::LOGO).into_iter().next()? {
        tally_core::FieldValue::Record(record) => record.url,
        _ => None,
    }
}

fn investability(row: &EvaluationRow) -> Option<InvestabilityVotes> {
    let yes = row.number_or_zero(fields::INVESTABLE_YES);
    let no = row.number_or_zero(fields::INVESTABLE_NO);
    let total = yes + no;
    (total > 0.0).then(|| InvestabilityVotes {
        yes,
        no,
        yes_ratio: round_to(yes / total * 100.0, 1),
    })
}

fn breakdown(row: &EvaluationRow, pairs: &[(&str, &str)]) -> Vec<CategoryScore> {
    pairs
        .iter()
        .map(|(category, field)| CategoryScore {
            category: (*category).to_string(),
            score: row.number_or_zero(field),
        })
        .collect()
}

fn flags(row: &EvaluationRow) -> Vec<FlagGroup> {
    Dimension::ALL
        .into_iter()
        .flat_map(|dimension| {
            Flag::ALL.into_iter().map(move |flag| FlagGroup {
                dimension,
                flag,
                items: row.text_list(&fields::flag_field(dimension, flag)),
            })
        })
        .collect()
}

fn human_due_diligence(row: &EvaluationRow) -> HumanDueDiligence {
    HumanDueDiligence {
        average: row.number(fields::HDD_AVERAGE).map(|v| round_to(v, 2)),
        exceptional: row
            .number(fields::HDD_EXCEPTIONAL)
            .is_some_and(|v| (v - 1.0).abs() < f64::EPSILON),
        evaluator: row
            .first_text(fields::HDD_EVALUATOR)
            .unwrap_or_else(|| UNKNOWN_EVALUATOR.to_string()),
        notes: row
            .first_text(fields::HDD_NOTES)
            .unwrap_or_else(|| NO_NOTES.to_string()),
    }
}

fn scientific_due_diligence(row: &EvaluationRow) -> ScientificDueDiligence {
    let text_or = |field: &str, fallback: &str| {
        row.first_text(field)
            .unwrap_or_else(|| fallback.to_string())
    };
    ScientificDueDiligence {
        brs: text_or(fields::BRS_CALCULATION, NO_INTERPRETATION),
        grit: text_or(fields::GRIT_CALCULATION, NO_INTERPRETATION),
        olbi_exhaustion: BurnoutReading::from_descriptor(text_or(fields::OLBI_EXHAUSTION, NO_RESULT)),
        olbi_disengagement: BurnoutReading::from_descriptor(text_or(
            fields::OLBI_DISENGAGEMENT,
            NO_RESULT,
        )),
    }
}

fn unconventional_thinking(row: &EvaluationRow, ctx: &ReportContext) -> UnconventionalThinking {
    let rows = align_rows(
        &row.list(fields::UT_FOUNDER),
        &row.text_list(fields::UT_EVALUATOR),
        &row.text_list(fields::UT_TAG),
        &ctx.founders,
    );
    let tally = tally_rows(&rows);
    UnconventionalThinking { rows, tally }
}
