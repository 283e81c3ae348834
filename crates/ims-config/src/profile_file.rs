//! Writing named profiles into a TOML config file.

use std::path::Path;

use crate::{ConfigError, ConnectionConfig};

/// Insert `[profiles.<name>]` into the TOML file at `path`, preserving every
/// other table. Parent directories are created. An existing profile of the
/// same name is replaced only when `overwrite` is set.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] on file system failures,
/// [`ConfigError::Toml`] if the existing file is not valid TOML and
/// [`ConfigError::ProfileExists`] if the profile is already defined.
pub fn write_profile(
    path: &Path,
    name: &str,
    connection: &ConnectionConfig,
    overwrite: bool,
) -> Result<(), ConfigError> {
    let path_text = path.display().to_string();
    let io_err = |source| ConfigError::Io {
        path: path_text.clone(),
        source,
    };
    let toml_err = |reason: String| ConfigError::Toml {
        path: path_text.clone(),
        reason,
    };

    let mut document = if path.exists() {
        let raw = std::fs::read_to_string(path).map_err(io_err)?;
        raw.parse::<toml::Table>()
            .map_err(|e| toml_err(e.to_string()))?
    } else {
        toml::Table::new()
    };

    let profile = toml::Value::try_from(connection).map_err(|e| toml_err(e.to_string()))?;
    let profiles = document
        .entry("profiles")
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let Some(profiles) = profiles.as_table_mut() else {
        return Err(toml_err("'profiles' is not a table".into()));
    };
    if !overwrite && profiles.contains_key(name) {
        return Err(ConfigError::ProfileExists {
            name: name.to_string(),
            path: path_text.clone(),
        });
    }
    profiles.insert(name.to_string(), profile);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let rendered = toml::to_string_pretty(&document).map_err(|e| toml_err(e.to_string()))?;
    std::fs::write(path, rendered).map_err(io_err)?;
    tracing::debug!(path = %path_text, profile = name, "wrote connection profile");
    Ok(())
}
