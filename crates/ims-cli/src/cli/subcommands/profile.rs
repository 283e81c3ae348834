use clap::{Args, Subcommand};

/// Connection profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// List the defined profiles.
    List,
    /// Show a resolved profile (password masked).
    Show(ProfileShowArgs),
    /// Save the connection flags as a named profile.
    Create(ProfileCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProfileShowArgs {
    /// Profile name (defaults to --profile or general.default_profile).
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProfileCreateArgs {
    /// Name of the new profile.
    pub name: String,
    /// Replace an existing profile with the same name.
    #[arg(long)]
    pub overwrite: bool,
    /// Config file to write (defaults to the user config file).
    #[arg(long)]
    pub file: Option<String>,
}
