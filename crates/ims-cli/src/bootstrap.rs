use std::path::Path;

use anyhow::Context;
use ims_config::ImsConfig;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config() -> anyhow::Result<ImsConfig> {
    load_dotenv(Path::new(".env"))?;
    ImsConfig::load().context("failed to load IMS configuration")
}

fn load_dotenv(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        return Ok(());
    }
    dotenvy::from_path(path)
        .with_context(|| format!("failed to load dotenv file at {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded dotenv file");
    Ok(())
}
