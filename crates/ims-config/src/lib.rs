//! # ims-config
//!
//! Layered configuration and connection profiles for the IMS operations CLI,
//! loaded with figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`IMS_*` prefix, `__` as separator)
//! 2. Project-level `.ims/config.toml`
//! 3. User-level `~/.config/ims/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `IMS_CONNECTION__HOST` -> `connection.host`,
//! `IMS_GENERAL__DEFAULT_PROFILE` -> `general.default_profile`, and so on.
//!
//! # Profiles
//!
//! ```toml
//! [connection]            # applies to every profile
//! port = 8081
//!
//! [profiles.prod]
//! host = "ims.example.com"
//! user = "ibmuser"
//! ```
//!
//! ```no_run
//! use ims_config::ImsConfig;
//!
//! let config = ImsConfig::load().expect("config");
//! let profile = config.resolve_profile(Some("prod")).expect("profile");
//! println!("host: {:?}", profile.connection.host);
//! ```

mod connection;
mod error;
mod general;
mod profile_file;

pub use connection::{ConnectionConfig, Protocol};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use profile_file::write_profile;

use std::collections::BTreeMap;
use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ImsConfig {
    /// Values shared by every profile.
    #[serde(default)]
    pub connection: ConnectionConfig,
    /// Named connection profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, ConnectionConfig>,
    #[serde(default)]
    pub general: GeneralConfig,
}

/// A connection with the profile it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProfile {
    /// `None` when only the shared `[connection]` section applied.
    pub name: Option<String>,
    pub connection: ConnectionConfig,
}

impl ImsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; the caller loads `.env` first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a loaded value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".ims/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("IMS_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ims").join("config.toml"))
    }

    /// Resolve the connection for `name`, falling back to
    /// `general.default_profile`, and overlay it on `[connection]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownProfile`] if the selected profile is not defined.
    pub fn resolve_profile(&self, name: Option<&str>) -> Result<ResolvedProfile, ConfigError> {
        let selected = name
            .filter(|n| !n.is_empty())
            .or_else(|| Some(self.general.default_profile.as_str()).filter(|n| !n.is_empty()));

        let Some(selected) = selected else {
            return Ok(ResolvedProfile {
                name: None,
                connection: self.connection.clone(),
            });
        };

        let profile = self
            .profiles
            .get(selected)
            .ok_or_else(|| ConfigError::UnknownProfile {
                name: selected.to_string(),
            })?;
        tracing::debug!(profile = selected, "resolved connection profile");

        Ok(ResolvedProfile {
            name: Some(selected.to_string()),
            connection: self.connection.clone().overlay(profile),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn with_profiles() -> ImsConfig {
        let mut config = ImsConfig {
            connection: ConnectionConfig {
                port: Some(8081),
                user: Some("shared".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        config.profiles.insert(
            "prod".into(),
            ConnectionConfig {
                host: Some("prod.example.com".into()),
                user: Some("produser".into()),
                ..Default::default()
            },
        );
        config
    }

    #[test]
    fn default_config_loads() {
        let config = ImsConfig::default();
        assert!(!config.connection.is_configured());
        assert!(config.profiles.is_empty());
        assert_eq!(config.general.request_timeout_secs, 30);
    }

    #[test]
    fn figment_builds_without_files() {
        let config: ImsConfig = ImsConfig::figment()
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.general.locale, "en");
    }

    #[test]
    fn no_profile_uses_shared_section() {
        let resolved = with_profiles().resolve_profile(None).unwrap();
        assert_eq!(resolved.name, None);
        assert_eq!(resolved.connection.port, Some(8081));
        assert_eq!(resolved.connection.host, None);
    }

    #[test]
    fn named_profile_overlays_shared_section() {
        let resolved = with_profiles().resolve_profile(Some("prod")).unwrap();
        assert_eq!(resolved.name.as_deref(), Some("prod"));
        assert_eq!(resolved.connection.host.as_deref(), Some("prod.example.com"));
        assert_eq!(resolved.connection.user.as_deref(), Some("produser"));
        assert_eq!(resolved.connection.port, Some(8081));
    }

    #[test]
    fn default_profile_applies_when_no_name_given() {
        let mut config = with_profiles();
        config.general.default_profile = "prod".into();
        let resolved = config.resolve_profile(None).unwrap();
        assert_eq!(resolved.name.as_deref(), Some("prod"));
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = with_profiles().resolve_profile(Some("qa")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile { name } if name == "qa"));
    }
}
