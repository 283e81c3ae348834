use ims_config::ResolvedProfile;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::profile::ProfileShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Print the stored profile overlaid on `[connection]`, password masked.
pub fn handle(args: &ProfileShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let name = args.name.as_deref().or(ctx.connection.profile.as_deref());
    let resolved = ctx.config.resolve_profile(name)?;
    let masked = ResolvedProfile {
        name: resolved.name,
        connection: resolved.connection.masked(),
    };
    output(&masked, flags.format)
}
