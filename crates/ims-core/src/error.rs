//! Local validation errors, raised before any request leaves the process.

use thiserror::Error;

use crate::resource::ResourceKind;

/// A parameter bag broke one of its construction rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// No `names` were supplied at all.
    #[error("{resource} name is required")]
    MissingNames { resource: ResourceKind },

    /// The first entry of `names` is absent or blank.
    #[error("{resource} name is required and must not be blank")]
    BlankName { resource: ResourceKind },

    /// Neither a region number nor a job name was supplied.
    #[error("either region number or job name (but not both) must be specified: neither was given")]
    RegionSelectorMissing,

    /// Both a region number and a job name were supplied.
    #[error("either region number or job name (but not both) must be specified: both were given")]
    RegionSelectorConflict,

    /// A job name was supplied but has no content.
    #[error("if job name is specified it must have a value")]
    BlankJobName,
}
