//! # tally-extract
//!
//! Turns unstructured feedback blobs into structured per-evaluator records.
//!
//! A blob is several evaluators' comments run together, with nothing but the
//! evaluators' names (and `<Category>:` headings) marking where one comment
//! ends and the next begins. Extraction runs in stages:
//!
//! 1. [`markup::normalize_markup`]: `<br>` to newline, emphasis stripped.
//! 2. [`roster::EvaluatorRoster::find_spans`]: ordered name spans.
//! 3. [`mentor::group_by_mentor`]: one segment per name, via [`spans::partition`].
//! 4. [`category::split_categories`] and [`category::format_sections`].
//!
//! Mentor scores come from separate `"Name: score"` fields
//! ([`scores`]); founder tag tallies live in [`tags`].
//!
//! Nothing here fails on bad input. Unparsable tokens are reported in
//! [`tally_core::outcome::ParseOutcome::skipped`] and logged at debug level.

pub mod category;
pub mod error;
pub mod extractor;
pub mod markup;
pub mod mentor;
pub mod roster;
pub mod scores;
pub mod spans;
pub mod tags;

pub use error::ExtractError;
pub use extractor::{ANONYMOUS, FeedbackExtractor};
pub use roster::{CategoryLabels, EvaluatorRoster};
