//! # tally-report
//!
//! Shapes evaluation rows into the two views the dashboard shows: a
//! program-wide [`ProgramOverview`] and a per-startup [`StartupReport`].
//!
//! Builders never fail. Missing cells become zeros, `None`, or placeholder
//! text, and skipped score tokens are carried in the report's diagnostics.

pub mod context;
pub mod overview;
pub mod selection;
pub mod startup;

pub use context::ReportContext;
pub use overview::ProgramOverview;
pub use selection::{StartupEntry, select, selectable, selectable_ids};
pub use startup::StartupReport;

/// Round to `places` decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Arithmetic mean, `None` for an empty input.
pub(crate) fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0.0), |(sum, count), v| (sum + v, count + 1.0));
    (count > 0.0).then(|| sum / count)
}
