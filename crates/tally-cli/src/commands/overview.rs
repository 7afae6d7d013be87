use tally_report::ProgramOverview;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tally overview`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx.load_rows().await?;
    let overview = ProgramOverview::from_rows(&rows, &ctx.report.startups);
    output(&overview, flags.format)
}
