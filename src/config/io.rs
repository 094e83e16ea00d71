use super::types::TrashConfig;
use super::ConfigError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILENAME: &str = "trash.json";

/// Get the path to the configuration file
#[must_use]
pub fn get_config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILENAME)
}

/// Read the configuration file. Returns `Ok(None)` if it does not exist.
pub async fn read_config(config_dir: &Path) -> Result<Option<TrashConfig>, ConfigError> {
    let config_path = get_config_path(config_dir);
    if !config_path.exists() {
        debug!("No trash config at {}, using defaults", config_path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path).await?;
    let config: TrashConfig = serde_json::from_str(&content)?;
    validate(&config)?;
    Ok(Some(config))
}

/// Write the configuration file as pretty-printed JSON.
pub async fn write_config(config_dir: &Path, config: &TrashConfig) -> Result<(), ConfigError> {
    validate(config)?;
    fs::create_dir_all(config_dir).await?;
    let content = serde_json::to_string_pretty(config)?;
    fs::write(get_config_path(config_dir), content).await?;
    Ok(())
}

fn validate(config: &TrashConfig) -> Result<(), ConfigError> {
    if config.container_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "containerName must not be empty".to_string(),
        ));
    }
    Ok(())
}
