use std::io::Read;

use anyhow::{Context, bail};
use serde::Serialize;
use tally_core::feedback::{MentorFeedback, MentorRecords};
use tally_core::outcome::{ParseOutcome, SkippedEntry};
use tally_extract::EvaluatorRoster;
use tally_extract::scores::parse_score_field;

use crate::cli::root_commands::FeedbackArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Structured extraction of one feedback blob.
#[derive(Debug, Serialize)]
struct FeedbackResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    preamble: Option<String>,
    feedback: Vec<MentorFeedback>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<SkippedEntry>,
}

/// Handle `tally feedback`.
pub fn handle(args: &FeedbackArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_text(args)?;
    let extractor = &ctx.report.extractor;
    let scores = parse_score_args(&args.scores, extractor.roster())?;
    for entry in &scores.skipped {
        tracing::warn!(raw = %entry.raw, reason = ?entry.reason, "skipping score token");
    }

    // Tables render flat records; the nested response only makes sense as JSON.
    if args.records || flags.format == OutputFormat::Table {
        return output(&extractor.records(&text, &scores.parsed), flags.format);
    }

    let (preamble, feedback) = extractor.extract_with_preamble(&text, &scores.parsed);
    let response = FeedbackResponse {
        preamble,
        feedback,
        skipped: scores.skipped,
    };
    output(&response, flags.format)
}

fn read_text(args: &FeedbackArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read feedback from {}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read feedback from stdin")?;
    Ok(text)
}

/// Parse repeated `--score "Category=Name: 3, Other: 2"` arguments.
fn parse_score_args(
    raw_args: &[String],
    roster: &EvaluatorRoster,
) -> anyhow::Result<ParseOutcome<MentorRecords>> {
    let mut outcome = ParseOutcome::<MentorRecords>::default();
    for raw in raw_args {
        let Some((category, tokens)) = raw.split_once('=') else {
            bail!("--score expects CATEGORY=SCORES, got {raw:?}");
        };
        let category = category.trim();
        if category.is_empty() {
            bail!("--score is missing a category in {raw:?}");
        }
        let parsed = parse_score_field(tokens, Some(roster));
        for (mentor, score) in parsed.parsed {
            outcome.parsed.insert(mentor, category, score);
        }
        outcome.skipped.extend(parsed.skipped);
    }
    Ok(outcome)
}
