//! Program-wide metrics and the risk/reward matrix.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tally_core::EvaluationRow;
use tally_core::enums::Tier;
use tally_core::fields;
use tally_core::lookup::NameLookup;

use crate::mean;

/// Investability votes summed over all startups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvestabilitySummary {
    pub yes: f64,
    pub no: f64,
    /// Share of yes votes in percent; `None` without any votes.
    pub yes_percent: Option<f64>,
}

impl InvestabilitySummary {
    #[must_use]
    pub fn new(yes: f64, no: f64) -> Self {
        let total = yes + no;
        Self {
            yes,
            no,
            yes_percent: (total > 0.0).then(|| yes / total * 100.0),
        }
    }
}

/// One startup on the risk/reward scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatrixPoint {
    pub id: String,
    pub label: String,
    pub risk: f64,
    pub reward: f64,
    pub risk_tier: Tier,
    pub reward_tier: Tier,
}

/// Response from `tally overview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProgramOverview {
    pub generated_at: DateTime<Utc>,
    pub num_startups: usize,
    pub total_reviews: f64,
    pub average_risk: Option<f64>,
    pub average_reward: Option<f64>,
    pub investability: InvestabilitySummary,
    pub matrix: Vec<MatrixPoint>,
}

impl ProgramOverview {
    /// Aggregate every row. Rows without an `Id` are ignored.
    #[must_use]
    pub fn from_rows(rows: &[EvaluationRow], startups: &NameLookup) -> Self {
        let rows: Vec<&EvaluationRow> = rows.iter().filter(|r| r.id.is_some()).collect();

        let num_startups = rows
            .iter()
            .filter_map(|r| r.id.as_deref())
            .collect::<BTreeSet<_>>()
            .len();
        let total_reviews: f64 = rows
            .iter()
            .map(|r| r.number_or_zero(fields::NUMBER_OF_REVIEWS))
            .sum();

        let average_risk = mean(rows.iter().filter_map(|r| r.number(fields::AVERAGE_RISK)));
        let average_reward = mean(rows.iter().filter_map(|r| r.number(fields::AVERAGE_REWARD)));

        let investability = InvestabilitySummary::new(
            rows.iter().map(|r| r.number_or_zero(fields::INVESTABLE_YES)).sum(),
            rows.iter().map(|r| r.number_or_zero(fields::INVESTABLE_NO)).sum(),
        );

        let matrix = rows
            .iter()
            .filter_map(|row| {
                let id = row.id.as_deref()?;
                let risk = row.number(fields::AVERAGE_RISK)?;
                let reward = row.number(fields::AVERAGE_REWARD)?;
                Some(MatrixPoint {
                    id: id.to_string(),
                    label: startups.label_or(id, "ID"),
                    risk,
                    reward,
                    risk_tier: Tier::classify(risk),
                    reward_tier: Tier::classify(reward),
                })
            })
            .collect();

        tracing::debug!(rows = rows.len(), num_startups, "built program overview");

        Self {
            generated_at: Utc::now(),
            num_startups,
            total_reviews,
            average_risk,
            average_reward,
            investability,
            matrix,
        }
    }
}
