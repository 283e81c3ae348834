use ims_config::ImsConfig;

/// Sections whose env vars need `__` between section and field.
const SECTIONS: [(&str, &str); 2] = [
    ("IMS_CONNECTION_", "IMS_CONNECTION__HOST"),
    ("IMS_GENERAL_", "IMS_GENERAL__DEFAULT_PROFILE"),
];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ImsConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ImsConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for (prefix, example) in SECTIONS {
        if let Some(key) = single_underscore_key(&env_keys, prefix) {
            warnings.push(format!(
                "{key} is ignored. Use double underscores between section and field (example: {example})."
            ));
        }
    }

    if !config.connection.is_configured()
        && config.profiles.is_empty()
        && has_env_prefix(&env_keys, "IMS_HOST")
    {
        warnings.push(
            "IMS_HOST is set but connections read IMS_CONNECTION__HOST.".to_string(),
        );
    }

    warnings
}

fn single_underscore_key<'a>(keys: &'a [String], prefix: &str) -> Option<&'a str> {
    keys.iter()
        .filter(|key| key.starts_with(prefix))
        .find(|key| !key[prefix.len()..].starts_with('_'))
        .map(String::as_str)
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
