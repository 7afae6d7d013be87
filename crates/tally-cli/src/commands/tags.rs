use tally_extract::tags::tally_tags;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TagsArgs;
use crate::output::output;

/// Handle `tally tags <entry>...`.
pub fn handle(args: &TagsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = tally_tags(&args.entries);
    for entry in &outcome.skipped {
        tracing::warn!(raw = %entry.raw, "ignoring entry without \"Founder: Tag\" form");
    }
    output(&outcome.parsed, flags.format)
}
