use tally_report::{StartupReport, select};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StartupArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tally startup <id-or-name>`.
pub async fn handle(args: &StartupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx.load_rows().await?;
    let row = select(&rows, &args.startup, &ctx.report.startups)?;
    let report = StartupReport::build(row, &ctx.report);
    output(&report, flags.format)
}
