use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Program-wide metrics and the risk/reward matrix.
    Overview,
    /// Startups that can be opened with `tally startup`.
    List,
    /// Full evaluation report for one startup.
    Startup(StartupArgs),
    /// Split a feedback blob into per-mentor, per-category feedback.
    Feedback(FeedbackArgs),
    /// Count Bonus Star / Red Flag tags per founder.
    Tags(TagsArgs),
    /// Print the JSON Schema of a report type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct StartupArgs {
    /// Startup `Id` or display name
    pub startup: String,
}

#[derive(Clone, Debug, Args)]
pub struct FeedbackArgs {
    /// Feedback text (reads stdin when neither --text nor --file is given)
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read feedback text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Mentor scores for one category: "Category=Name: 3, Other Name: 2"
    #[arg(long = "score", value_name = "CATEGORY=SCORES")]
    pub scores: Vec<String>,

    /// Print flat (evaluator, category, score, comment) records
    #[arg(long)]
    pub records: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TagsArgs {
    /// Entries of the form "Founder: Tag"
    #[arg(required = true)]
    pub entries: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Overview,
    Startup,
    FeedbackRecord,
    TagTally,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Report type to describe
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
