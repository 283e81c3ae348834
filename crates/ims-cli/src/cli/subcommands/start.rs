use clap::{Args, Subcommand};

/// Start commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StartCommands {
    /// Start an IMS application program.
    #[command(visible_alias = "pgm")]
    Program(StartProgramArgs),
    /// Start an IMS transaction.
    #[command(visible_alias = "tran")]
    Transaction(StartTransactionArgs),
    /// Start an IMS dependent region.
    #[command(visible_alias = "reg")]
    Region(StartRegionArgs),
}

#[derive(Clone, Debug, Args)]
pub struct StartProgramArgs {
    /// Names of the programs to start.
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,
    /// Status keywords to start (default: SCHD).
    #[arg(long, short = 'a', num_args = 1.., value_delimiter = ',')]
    pub attributes: Option<Vec<String>>,
    /// IMS members to route the command to.
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub route: Option<Vec<String>>,
}

#[derive(Clone, Debug, Args)]
pub struct StartTransactionArgs {
    /// Codes of the transactions to start.
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,
    /// Status keywords to start (default: SCHD).
    #[arg(long, short = 'a', num_args = 1.., value_delimiter = ',')]
    pub attributes: Option<Vec<String>>,
    /// IMS members to route the command to.
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub route: Option<Vec<String>>,
}

#[derive(Clone, Debug, Args)]
pub struct StartRegionArgs {
    /// JCL members that start the region (server default when omitted).
    pub member_names: Vec<String>,
    /// Use the member's JCL instead of the IMS procedure symbolics.
    #[arg(long)]
    pub local: bool,
    /// Job name for the started region.
    #[arg(long)]
    pub job_name: Option<String>,
    /// IMS members to route the command to.
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub route: Option<Vec<String>>,
}
