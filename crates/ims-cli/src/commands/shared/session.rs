use anyhow::Context;
use ims_client::{ImsRestClient, ImsSession};

use crate::context::AppContext;

/// Resolve the connection profile and open an authenticated client.
pub fn open_client(ctx: &AppContext) -> anyhow::Result<ImsRestClient> {
    let resolved = ctx.resolve_connection()?;
    let session = ImsSession::from_connection(&resolved.connection, ctx.request_timeout())?;
    tracing::debug!(
        profile = resolved.name.as_deref().unwrap_or("<none>"),
        ?session,
        "opened IMS session"
    );
    ImsRestClient::new(session).context("failed to build the HTTP client")
}
