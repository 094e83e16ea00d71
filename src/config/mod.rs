mod io;
mod types;

pub use io::{get_config_path, read_config, write_config, CONFIG_FILENAME};
pub use types::{default_container_name, default_enabled, default_retention_days, TrashConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
