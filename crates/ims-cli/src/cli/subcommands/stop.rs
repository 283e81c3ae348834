use clap::{Args, Subcommand};

/// Stop commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StopCommands {
    /// Stop an IMS application program.
    #[command(visible_alias = "pgm")]
    Program(StopProgramArgs),
    /// Stop an IMS transaction.
    #[command(visible_alias = "tran")]
    Transaction(StopTransactionArgs),
    /// Stop an IMS dependent region.
    #[command(visible_alias = "reg")]
    Region(StopRegionArgs),
}

#[derive(Clone, Debug, Args)]
pub struct StopProgramArgs {
    /// Names of the programs to stop.
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,
    /// Status keywords to stop (default: SCHD).
    #[arg(long, short = 'a', num_args = 1.., value_delimiter = ',')]
    pub attributes: Option<Vec<String>>,
    /// IMS members to route the command to.
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub route: Option<Vec<String>>,
}

#[derive(Clone, Debug, Args)]
pub struct StopTransactionArgs {
    /// Codes of the transactions to stop.
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,
    /// Status keywords to stop (default: SCHD).
    #[arg(long, short = 'a', num_args = 1.., value_delimiter = ',')]
    pub attributes: Option<Vec<String>>,
    /// IMS members to route the command to.
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub route: Option<Vec<String>>,
}

/// Exactly one of `--region-ids` and `--job-name` selects the region.
#[derive(Clone, Debug, Args)]
pub struct StopRegionArgs {
    /// Region numbers to stop.
    #[arg(long, alias = "reg-num", num_args = 1.., value_delimiter = ',')]
    pub region_ids: Option<Vec<u32>>,
    /// Job name of the region to stop.
    #[arg(long)]
    pub job_name: Option<String>,
    /// Transaction to abnormally terminate in the region.
    #[arg(long)]
    pub abdump: Option<String>,
    /// Wait-for-input transaction whose message processing stops.
    #[arg(long)]
    pub transaction: Option<String>,
    /// Cancel a region that a stop with --abdump could not stop.
    #[arg(long)]
    pub cancel: bool,
}
