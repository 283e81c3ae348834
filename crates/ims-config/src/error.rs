//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A named profile was requested but is not defined.
    #[error("Profile '{name}' is not defined in any configuration file")]
    UnknownProfile { name: String },

    /// A connection field needed to open a session is missing.
    #[error("Connection field '{field}' is not configured (set it in a profile, IMS_CONNECTION__{env}, or --{flag})")]
    MissingField {
        field: &'static str,
        env: &'static str,
        flag: &'static str,
    },

    /// `profile create` would replace an existing profile.
    #[error("Profile '{name}' already exists in {path} (use --overwrite to replace it)")]
    ProfileExists { name: String, path: String },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// Reading or writing a config file failed.
    #[error("Config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A config file could not be parsed or serialized as TOML.
    #[error("Config file {path} is not valid TOML: {reason}")]
    Toml { path: String, reason: String },
}
