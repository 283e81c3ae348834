//! Authenticated session built from a resolved connection profile.

use std::fmt;
use std::time::Duration;

use ims_config::{ConfigError, ConnectionConfig, Protocol};
use ims_core::ResourceRequest;

/// Default request timeout when the caller does not supply one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// IMS Connect routing forwarded to the operations API as headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImsConnectTarget {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub plex: Option<String>,
}

/// Everything needed to reach and authenticate against the operations API.
#[derive(Clone)]
pub struct ImsSession {
    pub host: String,
    pub port: Option<u16>,
    pub user: String,
    password: String,
    pub protocol: Protocol,
    /// Path prefix without a trailing slash; empty for the server root.
    pub base_path: String,
    pub reject_unauthorized: bool,
    pub ims_connect: Option<ImsConnectTarget>,
    pub timeout: Duration,
}

impl ImsSession {
    /// Build a session from a fully overlaid connection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if host, user or password is absent.
    pub fn from_connection(
        connection: &ConnectionConfig,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        connection.require_credentials()?;

        let ims_connect = if connection.ims_connect_host.is_some()
            || connection.ims_connect_port.is_some()
            || connection.plex.is_some()
        {
            Some(ImsConnectTarget {
                host: connection.ims_connect_host.clone(),
                port: connection.ims_connect_port,
                plex: connection.plex.clone(),
            })
        } else {
            None
        };

        Ok(Self {
            host: connection.host.clone().unwrap_or_default(),
            port: connection.port,
            user: connection.user.clone().unwrap_or_default(),
            password: connection.password.clone().unwrap_or_default(),
            protocol: connection.protocol.unwrap_or_default(),
            base_path: normalize_base_path(connection.base_path.as_deref().unwrap_or_default()),
            reject_unauthorized: connection.reject_unauthorized.unwrap_or(true),
            ims_connect,
            timeout,
        })
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// `protocol://host[:port]base_path`
    #[must_use]
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!(
                "{}://{}:{port}{}",
                self.protocol, self.host, self.base_path
            ),
            None => format!("{}://{}{}", self.protocol, self.host, self.base_path),
        }
    }

    /// Absolute URL of an encoded resource request.
    #[must_use]
    pub fn url_for(&self, request: &ResourceRequest) -> String {
        format!("{}{request}", self.base_url())
    }
}

impl fmt::Debug for ImsSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImsSession")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"****")
            .field("protocol", &self.protocol)
            .field("base_path", &self.base_path)
            .field("reject_unauthorized", &self.reject_unauthorized)
            .field("ims_connect", &self.ims_connect)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
