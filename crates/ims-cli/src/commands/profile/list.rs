use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProfileRow<'a> {
    name: &'a str,
    default: bool,
    host: Option<&'a str>,
    port: Option<u16>,
    user: Option<&'a str>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&rows(ctx), flags.format)
}

fn rows(ctx: &AppContext) -> Vec<ProfileRow<'_>> {
    ctx.config
        .profiles
        .iter()
        .map(|(name, connection)| ProfileRow {
            name: name.as_str(),
            default: *name == ctx.config.general.default_profile,
            host: connection.host.as_deref(),
            port: connection.port,
            user: connection.user.as_deref(),
        })
        .collect()
}
