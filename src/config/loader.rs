//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from a TOML file.
pub fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServiceConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration, degrading to defaults instead of failing.
///
/// An absent file is the normal "no config deployed" case and is only
/// logged at info level. An unreadable or malformed file is logged as a
/// warning; the service still starts with defaults.
pub fn load_or_default(path: Option<&Path>) -> ServiceConfig {
    let Some(path) = path else {
        return ServiceConfig::default();
    };

    if !path.exists() {
        tracing::info!(path = %path.display(), "Config file absent, using defaults");
        return ServiceConfig::default();
    }

    match read_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to load config, using defaults"
            );
            ServiceConfig::default()
        }
    }
}
