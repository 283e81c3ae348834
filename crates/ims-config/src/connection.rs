//! Connection profile: where the IMS operations API lives and who calls it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Transport scheme of the IMS operations API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl Protocol {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(ConfigError::InvalidValue {
                field: "protocol".into(),
                reason: format!("expected 'http' or 'https', got '{other}'"),
            }),
        }
    }
}

/// Connection settings. Every field is optional so that layers (base
/// section, named profile, command-line flags) can be overlaid field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionConfig {
    /// Host name of the IMS operations API server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,

    /// Path prefix of the REST API, e.g. `/ims/v1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Reject self-signed or otherwise untrusted certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_unauthorized: Option<bool>,

    /// IMS Connect host the API server forwards commands to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ims_connect_host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ims_connect_port: Option<u16>,

    /// IMSplex name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plex: Option<String>,
}

impl ConnectionConfig {
    /// Return `self` with every field that `top` sets replaced by `top`'s value.
    #[must_use]
    pub fn overlay(self, top: &Self) -> Self {
        Self {
            host: top.host.clone().or(self.host),
            port: top.port.or(self.port),
            user: top.user.clone().or(self.user),
            password: top.password.clone().or(self.password),
            protocol: top.protocol.or(self.protocol),
            base_path: top.base_path.clone().or(self.base_path),
            reject_unauthorized: top.reject_unauthorized.or(self.reject_unauthorized),
            ims_connect_host: top.ims_connect_host.clone().or(self.ims_connect_host),
            ims_connect_port: top.ims_connect_port.or(self.ims_connect_port),
            plex: top.plex.clone().or(self.plex),
        }
    }

    /// Check that host, user and password are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first missing field.
    pub fn require_credentials(&self) -> Result<(), ConfigError> {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        if !present(&self.host) {
            return Err(ConfigError::MissingField {
                field: "host",
                env: "HOST",
                flag: "host",
            });
        }
        if !present(&self.user) {
            return Err(ConfigError::MissingField {
                field: "user",
                env: "USER",
                flag: "user",
            });
        }
        if !present(&self.password) {
            return Err(ConfigError::MissingField {
                field: "password",
                env: "PASSWORD",
                flag: "password",
            });
        }
        Ok(())
    }

    /// Check if any field is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        *self != Self::default()
    }

    /// Copy suitable for display, with the password replaced.
    #[must_use]
    pub fn masked(&self) -> Self {
        Self {
            password: self.password.as_ref().map(|_| "****".to_string()),
            ..self.clone()
        }
    }
}
