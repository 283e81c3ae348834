mod program;
mod region;
mod transaction;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StopCommands;
use crate::commands::shared::run;
use crate::context::AppContext;

/// Handle `ims stop <resource>`.
pub async fn handle(
    action: &StopCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StopCommands::Program(args) => run(&program::StopProgram::from(args), ctx, flags).await,
        StopCommands::Transaction(args) => {
            run(&transaction::StopTransaction::from(args), ctx, flags).await
        }
        StopCommands::Region(args) => run(&region::StopRegion::from(args), ctx, flags).await,
    }
}
