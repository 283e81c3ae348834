use crate::error::InvalidArgument;
use crate::params::{StartRegionParams, UpdateProgramParams, UpdateTransactionParams};
use crate::query::{QueryBuilder, ResourceRequest};
use crate::resource::{REGION, ResourceKind, START};

use super::status_update;

/// Encode a start-program request. Without explicit `start` keywords the
/// request resumes scheduling (`start=SCHD`).
///
/// # Errors
///
/// Returns [`InvalidArgument`] when `names` is missing or its first entry is blank.
pub fn start_program(params: &UpdateProgramParams) -> Result<ResourceRequest, InvalidArgument> {
    let names = params.validate()?;
    tracing::debug!(?params, "encoding start program");
    Ok(status_update(
        ResourceKind::Program,
        names,
        START,
        params.start.as_deref(),
        params.route.as_deref(),
    ))
}

/// # Errors
///
/// Returns [`InvalidArgument`] when `names` is missing or its first entry is blank.
pub fn start_transaction(
    params: &UpdateTransactionParams,
) -> Result<ResourceRequest, InvalidArgument> {
    let names = params.validate()?;
    tracing::debug!(?params, "encoding start transaction");
    Ok(status_update(
        ResourceKind::Transaction,
        names,
        START,
        params.start.as_deref(),
        params.route.as_deref(),
    ))
}

/// Encode a start-region request: `memberName → local → jobname → route`.
///
/// # Errors
///
/// Returns [`InvalidArgument::BlankJobName`] for a present but blank job name.
pub fn start_region(params: &StartRegionParams) -> Result<ResourceRequest, InvalidArgument> {
    params.validate()?;
    tracing::debug!(?params, "encoding start region");

    let mut query = QueryBuilder::new();
    if let Some(members) = &params.member_name {
        query.list("memberName", members);
    }
    if let Some(local) = params.local {
        query.scalar("local", if local { "true" } else { "false" });
    }
    query.opt_scalar("jobname", params.job_name.as_deref());
    if let Some(route) = &params.route {
        query.list("route", route);
    }
    Ok(query.build(format!("/{REGION}/{START}")))
}
