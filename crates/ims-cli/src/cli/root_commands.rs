use clap::Subcommand;

use crate::cli::subcommands::{ProfileCommands, StartCommands, StopCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Start IMS programs, transactions and regions.
    #[command(visible_alias = "sta")]
    Start {
        #[command(subcommand)]
        action: StartCommands,
    },
    /// Stop IMS programs, transactions and regions.
    #[command(visible_alias = "sto")]
    Stop {
        #[command(subcommand)]
        action: StopCommands,
    },
    /// Connection profiles.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}
