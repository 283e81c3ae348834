//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_request_timeout_secs() -> u64 {
    30
}

fn default_locale() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Profile used when `--profile` is not given. Empty means the bare
    /// `[connection]` section.
    #[serde(default)]
    pub default_profile: String,

    /// Locale of operator-facing messages.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Transport timeout for the single REST request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_profile: String::new(),
            locale: default_locale(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl GeneralConfig {
    /// Reject values the request path cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `request_timeout_secs` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.request_timeout_secs".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        Ok(())
    }
}
