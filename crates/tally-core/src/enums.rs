//! Flags, dimensions, score tiers, tags, and severity levels for Tally.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// One of the two evaluation axes every startup is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Risk,
    Reward,
}

impl Dimension {
    pub const ALL: [Self; 2] = [Self::Risk, Self::Reward];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Risk => "risk",
            Self::Reward => "reward",
        }
    }

    /// Prefix used by the flagged-field columns (`RISK | ...`, `Reward | ...`).
    #[must_use]
    pub const fn field_prefix(self) -> &'static str {
        match self {
            Self::Risk => "RISK",
            Self::Reward => "Reward",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Flag
// ---------------------------------------------------------------------------

/// Severity-coded feedback bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    Green,
    Yellow,
    Red,
}

impl Flag {
    pub const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::Red];

    /// Capitalized name, as used in table column names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Coarse bucket for an average score on the 1–4 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// `> 3.5` is high, `> 2.5` is medium, everything else (NaN included) is low.
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value > 3.5 {
            Self::High
        } else if value > 2.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// Standout tag an evaluator can give a founder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    BonusStar,
    RedFlag,
}

impl Tag {
    /// Classify a free-text tag by substring, case-insensitively.
    ///
    /// "bonus" wins over "red" when both appear.
    #[must_use]
    pub fn classify(raw: &str) -> Option<Self> {
        let lower = raw.to_lowercase();
        if lower.contains("bonus") {
            Some(Self::BonusStar)
        } else if lower.contains("red") {
            Some(Self::RedFlag)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BonusStar => "Bonus Star",
            Self::RedFlag => "Red Flag",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Burnout severity read from an OLBI descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Moderate,
    Low,
    Unknown,
}

impl Severity {
    /// Match the first of "high", "moderate", "low" contained in the descriptor.
    #[must_use]
    pub fn from_descriptor(descriptor: &str) -> Self {
        let lower = descriptor.to_lowercase();
        if lower.contains("high") {
            Self::High
        } else if lower.contains("moderate") {
            Self::Moderate
        } else if lower.contains("low") {
            Self::Low
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Moderate => "🟡",
            Self::Low => "🟢",
            Self::Unknown => "⚪️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3.6, Tier::High)]
    #[case(3.5, Tier::Medium)]
    #[case(2.51, Tier::Medium)]
    #[case(2.5, Tier::Low)]
    #[case(0.0, Tier::Low)]
    #[case(f64::NAN, Tier::Low)]
    fn tier_thresholds(#[case] value: f64, #[case] expected: Tier) {
        assert_eq!(Tier::classify(value), expected);
    }

    #[rstest]
    #[case("Bonus Star", Some(Tag::BonusStar))]
    #[case("bonus", Some(Tag::BonusStar))]
    #[case("RED FLAG", Some(Tag::RedFlag))]
    #[case("Bonus over red", Some(Tag::BonusStar))]
    #[case("Neutral", None)]
    fn tag_classification(#[case] raw: &str, #[case] expected: Option<Tag>) {
        assert_eq!(Tag::classify(raw), expected);
    }

    #[rstest]
    #[case("High exhaustion", Severity::High)]
    #[case("Moderate", Severity::Moderate)]
    #[case("low disengagement", Severity::Low)]
    #[case("No result", Severity::Unknown)]
    fn severity_from_descriptor(#[case] raw: &str, #[case] expected: Severity) {
        assert_eq!(Severity::from_descriptor(raw), expected);
    }

    #[test]
    fn severity_icons() {
        assert_eq!(Severity::High.icon(), "🔴");
        assert_eq!(Severity::Unknown.icon(), "⚪️");
    }
}
