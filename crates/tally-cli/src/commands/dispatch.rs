use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Overview => commands::overview::handle(ctx, flags).await,
        Commands::List => commands::list::handle(ctx, flags).await,
        Commands::Startup(args) => commands::startup::handle(&args, ctx, flags).await,
        Commands::Feedback(args) => commands::feedback::handle(&args, ctx, flags),
        Commands::Tags(args) => commands::tags::handle(&args, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
