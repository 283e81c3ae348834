use clap::Parser;

pub mod connection;
pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use connection::ConnectionArgs;
pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ims` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ims",
    version,
    about = "Start and stop IMS programs, transactions and regions through the IMS operations API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Progress spinner: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use ims_config::Protocol;
    use pretty_assertions::assert_eq;

    use super::subcommands::{StartCommands, StopCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn start_and_stop_have_three_resources() {
        let command = Cli::command();
        for group in ["start", "stop"] {
            let sub = command
                .find_subcommand(group)
                .expect("group should exist");
            let names = sub
                .get_subcommands()
                .map(|c| c.get_name().to_string())
                .collect::<Vec<_>>();
            assert_eq!(names, vec!["program", "transaction", "region"]);
        }
    }

    #[test]
    fn aliases_resolve_to_groups_and_resources() {
        let cli = Cli::try_parse_from(["ims", "sta", "pgm", "PGM1"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Start {
                action: StartCommands::Program(_)
            }
        ));

        let cli = Cli::try_parse_from(["ims", "sto", "tran", "TRAN1"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Stop {
                action: StopCommands::Transaction(_)
            }
        ));
    }

    #[test]
    fn connection_options_pass_on_to_leaf_commands() {
        let cli = Cli::try_parse_from([
            "ims",
            "stop",
            "transaction",
            "TRAN1",
            "--host",
            "ims.example.com",
            "--port",
            "8081",
            "--user",
            "ibmuser",
            "--password",
            "secret",
            "--protocol",
            "http",
        ])
        .expect("cli should parse");

        let overrides = cli.connection.overrides();
        assert_eq!(overrides.host.as_deref(), Some("ims.example.com"));
        assert_eq!(overrides.port, Some(8081));
        assert_eq!(overrides.protocol, Some(Protocol::Http));
    }

    #[test]
    fn connection_options_accepted_before_group() {
        let cli = Cli::try_parse_from(["ims", "--host", "h", "stop", "program", "P"])
            .expect("cli should parse");
        assert_eq!(cli.connection.host.as_deref(), Some("h"));
    }

    #[test]
    fn attributes_and_region_ids_split_on_commas() {
        let cli = Cli::try_parse_from([
            "ims", "stop", "program", "P1", "P2", "--attributes", "SCHD,TRACE",
        ])
        .expect("cli should parse");
        let Commands::Stop {
            action: StopCommands::Program(args),
        } = cli.command
        else {
            panic!("expected stop program");
        };
        assert_eq!(args.names, vec!["P1", "P2"]);
        assert_eq!(
            args.attributes,
            Some(vec!["SCHD".to_string(), "TRACE".to_string()])
        );

        let cli = Cli::try_parse_from(["ims", "stop", "region", "--region-ids", "1,2", "--cancel"])
            .expect("cli should parse");
        let Commands::Stop {
            action: StopCommands::Region(args),
        } = cli.command
        else {
            panic!("expected stop region");
        };
        assert_eq!(args.region_ids, Some(vec![1, 2]));
        assert!(args.cancel);
    }

    #[test]
    fn program_requires_a_name() {
        assert!(Cli::try_parse_from(["ims", "stop", "program"]).is_err());
    }

    #[test]
    fn invalid_protocol_is_rejected() {
        assert!(
            Cli::try_parse_from(["ims", "--protocol", "ftp", "stop", "program", "P"]).is_err()
        );
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["ims", "stop", "program", "P", "--format", "raw", "--quiet"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Raw);
        assert!(flags.quiet);
    }
}
