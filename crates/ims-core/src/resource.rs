//! REST resource names and fixed keywords of the IMS operations API.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const PROGRAM: &str = "program";
pub const TRANSACTION: &str = "transaction";
pub const REGION: &str = "region";
pub const START: &str = "start";
pub const STOP: &str = "stop";

/// Status keyword sent when a start/stop names no explicit target state.
pub const DEFAULT_STATUS: &str = "SCHD";

/// The kinds of IMS resource this tool can start and stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Program,
    Transaction,
    Region,
}

impl ResourceKind {
    /// Path segment of the resource, relative to the API base path.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Program => PROGRAM,
            Self::Transaction => TRANSACTION,
            Self::Region => REGION,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Program => "IMS program",
            Self::Transaction => "IMS transaction",
            Self::Region => "IMS region",
        };
        f.write_str(label)
    }
}
