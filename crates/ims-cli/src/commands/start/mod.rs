mod program;
mod region;
mod transaction;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StartCommands;
use crate::commands::shared::run;
use crate::context::AppContext;

/// Handle `ims start <resource>`.
pub async fn handle(
    action: &StartCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StartCommands::Program(args) => run(&program::StartProgram::from(args), ctx, flags).await,
        StartCommands::Transaction(args) => {
            run(&transaction::StartTransaction::from(args), ctx, flags).await
        }
        StartCommands::Region(args) => run(&region::StartRegion::from(args), ctx, flags).await,
    }
}
