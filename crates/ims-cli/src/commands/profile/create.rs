use std::path::PathBuf;

use anyhow::Context;
use ims_config::{ConfigError, ImsConfig, write_profile};
use serde::Serialize;

use crate::cli::subcommands::profile::ProfileCreateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::messages::render;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProfileCreated<'a> {
    name: &'a str,
    path: String,
}

/// Save the connection flags of this invocation as `[profiles.<name>]`.
pub fn handle(
    args: &ProfileCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let connection = ctx.connection.overrides();
    if connection.host.as_deref().is_none_or(str::is_empty) {
        return Err(ConfigError::MissingField {
            field: "host",
            env: "HOST",
            flag: "host",
        }
        .into());
    }

    let path = match &args.file {
        Some(file) => PathBuf::from(file),
        None => ImsConfig::global_config_path()
            .context("no user configuration directory on this system; pass --file")?,
    };

    write_profile(&path, &args.name, &connection, args.overwrite)?;

    let created = ProfileCreated {
        name: &args.name,
        path: path.display().to_string(),
    };
    output(&created, flags.format)?;
    if !flags.quiet && flags.format != OutputFormat::Raw {
        println!(
            "{}",
            render(
                &ctx.messages.profile.created,
                &[("name", created.name), ("path", created.path.as_str())],
            )
        );
    }
    Ok(())
}
