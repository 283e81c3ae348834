//! Parameter bag → [`ResourceRequest`] encoders, one per operation.
//!
//! Each encoder validates its bag first, so an invalid bag never yields a
//! path. Output is deterministic: the same bag always encodes to the same
//! bytes, with fields emitted in the order the IMS operations API records.

mod start;
mod stop;

pub use start::{start_program, start_region, start_transaction};
pub use stop::{stop_program, stop_region, stop_transaction};

use crate::query::{QueryBuilder, ResourceRequest};
use crate::resource::{DEFAULT_STATUS, ResourceKind};

/// Shared shape of program and transaction status updates:
/// `names → <verb> → route`.
fn status_update(
    kind: ResourceKind,
    names: &[String],
    verb: &str,
    status: Option<&[String]>,
    route: Option<&[String]>,
) -> ResourceRequest {
    let mut query = QueryBuilder::new();
    // An empty list passes `list` without emitting `names=`.
    query.list("names", names);
    // A present status list is always sent, even when empty.
    match status {
        Some(status) => query.list_always(verb, status),
        None => query.scalar(verb, DEFAULT_STATUS),
    };
    if let Some(route) = route {
        query.list("route", route);
    }
    query.build(format!("/{}", kind.segment()))
}
