use tally_report::selectable;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tally list`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx.load_rows().await?;
    let entries = selectable(&rows, &ctx.report.startups);
    if entries.is_empty() && !rows.is_empty() {
        tracing::warn!(
            rows = rows.len(),
            "no loaded startup has a name in [roster.startups]"
        );
    }
    output(&entries, flags.format)
}
