use std::time::Duration;

use ims_config::{ImsConfig, ResolvedProfile};

use crate::cli::ConnectionArgs;
use crate::messages::Messages;

/// Per-invocation resources shared by every handler.
pub struct AppContext {
    pub config: ImsConfig,
    pub messages: Messages,
    pub connection: ConnectionArgs,
}

impl AppContext {
    #[must_use]
    pub const fn new(config: ImsConfig, messages: Messages, connection: ConnectionArgs) -> Self {
        Self {
            config,
            messages,
            connection,
        }
    }

    /// Resolve `--profile` (or the default profile) and overlay the
    /// connection flags given on the command line.
    pub fn resolve_connection(&self) -> anyhow::Result<ResolvedProfile> {
        let resolved = self
            .config
            .resolve_profile(self.connection.profile.as_deref())?;
        Ok(ResolvedProfile {
            name: resolved.name,
            connection: resolved.connection.overlay(&self.connection.overrides()),
        })
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.general.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use ims_config::{ConnectionConfig, ImsConfig};
    use pretty_assertions::assert_eq;

    use super::AppContext;
    use crate::cli::ConnectionArgs;
    use crate::messages::Messages;

    fn context(connection: ConnectionArgs) -> AppContext {
        let mut config = ImsConfig::default();
        config.profiles.insert(
            "dev".to_string(),
            ConnectionConfig {
                host: Some("dev.example.com".into()),
                user: Some("ibmuser".into()),
                ..Default::default()
            },
        );
        config.general.default_profile = "dev".to_string();
        AppContext::new(config, Messages::load("en").expect("catalog"), connection)
    }

    #[test]
    fn flags_override_the_default_profile() {
        let ctx = context(ConnectionArgs {
            host: Some("override.example.com".into()),
            password: Some("secret".into()),
            ..Default::default()
        });
        let resolved = ctx.resolve_connection().expect("profile should resolve");

        assert_eq!(resolved.name.as_deref(), Some("dev"));
        assert_eq!(resolved.connection.host.as_deref(), Some("override.example.com"));
        assert_eq!(resolved.connection.user.as_deref(), Some("ibmuser"));
        assert_eq!(resolved.connection.password.as_deref(), Some("secret"));
    }

    #[test]
    fn unknown_profile_flag_fails() {
        let ctx = context(ConnectionArgs {
            profile: Some("prod".into()),
            ..Default::default()
        });
        assert!(ctx.resolve_connection().is_err());
    }
}
