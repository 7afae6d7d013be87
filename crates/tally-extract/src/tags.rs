//! Per-founder tag tallies (Bonus Star / Red Flag).

use tally_core::FieldValue;
use tally_core::enums::Tag;
use tally_core::feedback::{TagRow, TagTally};
use tally_core::lookup::{FounderLink, NameLookup};
use tally_core::outcome::{ParseOutcome, SkipReason, SkippedEntry};

/// Filler for cells missing from the shorter lists in [`align_rows`].
pub const MISSING_CELL: &str = "—";

/// Count tags in `"Founder: Tag"` entries.
///
/// Entries without the `": "` separator are skipped. A founder is
/// registered even when its tag is not recognized.
#[must_use]
pub fn tally_tags<S: AsRef<str>>(entries: &[S]) -> ParseOutcome<TagTally> {
    let mut tally = TagTally::new();
    let mut skipped = Vec::new();

    for entry in entries {
        let entry = entry.as_ref();
        let Some((founder, tag)) = entry.split_once(": ") else {
            tracing::debug!(raw = entry, "skipping tag entry without separator");
            skipped.push(SkippedEntry::new(entry, SkipReason::MissingSeparator));
            continue;
        };
        tally.record(founder.trim(), Tag::classify(tag));
    }

    ParseOutcome::new(tally, skipped)
}

/// Zip founder links, evaluators and tags into rows.
///
/// The result is as long as the longest list; missing cells hold
/// [`MISSING_CELL`]. Founder links resolve through `founders`.
#[must_use]
pub fn align_rows(
    founders: &[FieldValue],
    evaluators: &[String],
    tags: &[String],
    lookup: &NameLookup,
) -> Vec<TagRow> {
    let len = founders.len().max(evaluators.len()).max(tags.len());
    (0..len)
        .map(|i| TagRow {
            founder: founders.get(i).map_or_else(
                || MISSING_CELL.to_string(),
                |value| FounderLink::from_value(value).resolve(lookup),
            ),
            evaluator: evaluators
                .get(i)
                .cloned()
                .unwrap_or_else(|| MISSING_CELL.to_string()),
            tag: tags.get(i).cloned().unwrap_or_else(|| MISSING_CELL.to_string()),
        })
        .collect()
}

/// Tally aligned rows by founder.
#[must_use]
pub fn tally_rows(rows: &[TagRow]) -> TagTally {
    let mut tally = TagTally::new();
    for row in rows {
        tally.record(&row.founder, Tag::classify(&row.tag));
    }
    tally
}
