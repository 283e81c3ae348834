//! Typed parameter bags for each startable/stoppable resource.
//!
//! Bags are plain data built from CLI arguments. The `validate` methods hold
//! the construction rules; every encoder calls them before building a path.

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;
use crate::resource::ResourceKind;

/// Parameters for starting or stopping IMS programs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProgramParams {
    /// Program names. Required; the first entry must be non-blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    /// Status keywords to start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Vec<String>>,
    /// Status keywords to stop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    /// IMS members the command is routed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<String>>,
}

impl UpdateProgramParams {
    /// Check the names rule and return the validated names.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MissingNames`] or [`InvalidArgument::BlankName`].
    pub fn validate(&self) -> Result<&[String], InvalidArgument> {
        require_names(self.names.as_deref(), ResourceKind::Program)
    }
}

/// Parameters for starting or stopping IMS transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTransactionParams {
    /// Transaction codes. Required; the first entry must be non-blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<String>>,
}

impl UpdateTransactionParams {
    /// Check the names rule and return the validated names.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MissingNames`] or [`InvalidArgument::BlankName`].
    pub fn validate(&self) -> Result<&[String], InvalidArgument> {
        require_names(self.names.as_deref(), ResourceKind::Transaction)
    }
}

/// Parameters for stopping a dependent region.
///
/// Exactly one of `reg_num` and `job_name` selects the region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopRegionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_num: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// Transaction to abnormally terminate in the region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abdump: Option<String>,
    /// Transaction in wait-for-input mode whose message processing stops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<String>,
    /// Cancel a region that a prior abdump stop could not stop.
    #[serde(default)]
    pub cancel: bool,
}

impl StopRegionParams {
    /// Enforce the region selector rules.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::RegionSelectorMissing`] when neither selector
    /// is set, [`InvalidArgument::RegionSelectorConflict`] when both are, and
    /// [`InvalidArgument::BlankJobName`] when the job name has no content.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        match (&self.reg_num, &self.job_name) {
            (None, None) => Err(InvalidArgument::RegionSelectorMissing),
            (Some(_), Some(_)) => Err(InvalidArgument::RegionSelectorConflict),
            (None, Some(job_name)) if job_name.trim().is_empty() => {
                Err(InvalidArgument::BlankJobName)
            }
            _ => Ok(()),
        }
    }
}

/// Parameters for starting a dependent region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRegionParams {
    /// JCL members to start. The server default member is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_name: Option<Vec<String>>,
    /// Override the IMS procedure symbolics with the member's JCL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<String>>,
}

impl StartRegionParams {
    /// # Errors
    ///
    /// Returns [`InvalidArgument::BlankJobName`] when a job name is present but blank.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        match &self.job_name {
            Some(job_name) if job_name.trim().is_empty() => Err(InvalidArgument::BlankJobName),
            _ => Ok(()),
        }
    }
}

fn require_names(
    names: Option<&[String]>,
    resource: ResourceKind,
) -> Result<&[String], InvalidArgument> {
    let names = names.ok_or(InvalidArgument::MissingNames { resource })?;
    match names.first() {
        Some(first) if !first.trim().is_empty() => Ok(names),
        _ => Err(InvalidArgument::BlankName { resource }),
    }
}
