use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Missions(args) => commands::missions::handle(&args, ctx, flags).await,
        Commands::Check(args) => commands::check::handle(&args, ctx, flags).await,
        Commands::Replay(args) => commands::replay::handle(&args, ctx, flags).await,
        Commands::Measure(args) => commands::measure::handle(&args, flags),
        Commands::Taxonomy(_) | Commands::Schema(_) => {
            anyhow::bail!("taxonomy/schema are handled before project setup")
        }
    }
}
