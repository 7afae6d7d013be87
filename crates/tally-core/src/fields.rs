//! Well-known field names of the evaluation table.
//!
//! These are the column names the program base uses. Feedback-blob and
//! mentor-score fields vary between programs and are configured in
//! `tally-config` instead.

pub const ID: &str = "Id";
pub const NUMBER_OF_REVIEWS: &str = "Number of Reviews";
pub const AVERAGE_RISK: &str = "Average RISK";
pub const AVERAGE_REWARD: &str = "Average Reward";
pub const INVESTABLE_YES: &str = "Investable_Yes_Count";
pub const INVESTABLE_NO: &str = "Investable_No_Count";
pub const LOGO: &str = "original logo";

// ── Risk / reward breakdown ─────────────────────────────────

/// `(display label, field)` pairs for the risk breakdown chart.
pub const RISK_BREAKDOWN: [(&str, &str); 3] = [
    (
        "State of Development",
        "Average RISK | State of development_Score",
    ),
    ("Momentum", "Average RISK | Momentum_Score"),
    ("Management", "Average RISK | Management_Score"),
];

/// `(display label, field)` pairs for the reward breakdown chart.
pub const REWARD_BREAKDOWN: [(&str, &str); 4] = [
    ("Market", "Average Reward | Market_Score"),
    ("Team", "Average Reward | Team_Score"),
    ("Pain", "Average Reward | Pain_Score"),
    ("Scalability", "Average Reward | Scalability_Score"),
];

// ── Human due diligence ─────────────────────────────────────

pub const HDD_AVERAGE: &str = "HDD_Calls_Average";
pub const HDD_EXCEPTIONAL: &str = "HDD_Calls_Exceptional";
pub const HDD_EVALUATOR: &str = "HDD_Calls_Evaluator";
pub const HDD_NOTES: &str = "HDD_Calls_Notes";

// ── Scientific due diligence ────────────────────────────────

pub const BRS_CALCULATION: &str = "BRS_Calculation";
pub const GRIT_CALCULATION: &str = "GRIT_Calculation";
pub const OLBI_EXHAUSTION: &str = "OLBI_Exhaustion_Descriptor";
pub const OLBI_DISENGAGEMENT: &str = "OLBI_Disengagement_Descriptor";

// ── Unconventional thinking ─────────────────────────────────

pub const UT_FOUNDER: &str = "Talks | Unconventional Thinking Founder";
pub const UT_EVALUATOR: &str = "Talks | Unconventional Thinking Evaluator";
pub const UT_TAG: &str = "Talks | Unconventional Thinking";

/// Field holding the flagged sub-dimensions for a dimension/flag pair,
/// e.g. `RISK | Fields_Green` or `Reward | Fields_Red`.
#[must_use]
pub fn flag_field(dimension: crate::enums::Dimension, flag: crate::enums::Flag) -> String {
    format!("{} | Fields_{}", dimension.field_prefix(), flag.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Dimension, Flag};

    #[test]
    fn flag_field_names_match_table_columns() {
        assert_eq!(flag_field(Dimension::Risk, Flag::Green), "RISK | Fields_Green");
        assert_eq!(flag_field(Dimension::Reward, Flag::Red), "Reward | Fields_Red");
    }
}
