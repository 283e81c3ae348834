mod create;
mod list;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::context::AppContext;

/// Handle `ims profile <subcommand>`.
pub fn handle(action: &ProfileCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ProfileCommands::List => list::handle(ctx, flags),
        ProfileCommands::Show(args) => show::handle(args, ctx, flags),
        ProfileCommands::Create(args) => create::handle(args, ctx, flags),
    }
}
