use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Start { action } => commands::start::handle(&action, ctx, flags).await,
        Commands::Stop { action } => commands::stop::handle(&action, ctx, flags).await,
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags),
    }
}
