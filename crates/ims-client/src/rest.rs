//! The REST invoker: one PUT, one JSON body, no retries.

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};

use crate::error::ClientError;
use crate::response::ResponseEnvelope;
use crate::session::ImsSession;
use ims_core::ResourceRequest;

/// HTTP client bound to one [`ImsSession`].
pub struct ImsRestClient {
    http: reqwest::Client,
    session: ImsSession,
}

impl ImsRestClient {
    /// Build a client for `session`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the TLS backend cannot be initialized.
    pub fn new(session: ImsSession) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ims-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(session.timeout)
            .danger_accept_invalid_certs(!session.reject_unauthorized)
            .default_headers(routing_headers(&session))
            .build()?;
        Ok(Self { http, session })
    }

    /// PUT `request` with an empty body and parse the JSON answer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure, [`ClientError::Api`]
    /// on a non-success status and [`ClientError::Parse`] on a malformed body.
    pub async fn put_expect_json(
        &self,
        request: &ResourceRequest,
    ) -> Result<ResponseEnvelope, ClientError> {
        let url = self.session.url_for(request);
        tracing::debug!(%url, "PUT");

        let resp = self
            .http
            .put(&url)
            .basic_auth(&self.session.user, Some(self.session.password()))
            .header(ACCEPT, "application/json")
            .body("")
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(ResponseEnvelope::from_json(json))
    }
}

/// Map a non-success status to [`ClientError::Api`] carrying the body.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// `hostname`, `port` and `plex` headers for IMS Connect routing.
fn routing_headers(session: &ImsSession) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let Some(target) = &session.ims_connect else {
        return headers;
    };

    let mut insert = |name: &'static str, value: String| match HeaderValue::from_str(&value) {
        Ok(value) => {
            headers.insert(HeaderName::from_static(name), value);
        }
        Err(error) => tracing::warn!(header = name, %error, "skipping invalid routing header"),
    };
    if let Some(host) = &target.host {
        insert("hostname", host.clone());
    }
    if let Some(port) = target.port {
        insert("port", port.to_string());
    }
    if let Some(plex) = &target.plex {
        insert("plex", plex.clone());
    }
    headers
}
