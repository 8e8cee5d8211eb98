mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
pub const BASE_URL_VAR: &str = "FASTAPI_URL";
pub const PORT_VAR: &str = "PORT";

/// Loads the config file named by `CONFIG_PATH` (default `config.yaml`) and
/// applies environment overrides on top. A missing file yields defaults.
pub async fn load() -> Result<Config> {
    let config_path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from_path(&config_path).await?;
    apply_overrides(&mut config, |key| env::var(key).ok())?;

    Ok(config)
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Applies environment overrides through `lookup`, so tests need not touch the
/// process environment.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup(BASE_URL_VAR) {
        config.detection.base_url = Some(base_url);
    }

    // An empty value counts as unset, wherever it came from.
    if config
        .detection
        .base_url
        .as_deref()
        .is_some_and(|url| url.trim().is_empty())
    {
        config.detection.base_url = None;
    }

    if let Some(port) = lookup(PORT_VAR) {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid {PORT_VAR} value: '{port}'")))?;
    }

    Ok(())
}
