//! Configuration file support

use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the sessions CLI, loaded from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionsConfig {
    /// Default page size for `list` when `--size` is not given
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Log filter used when neither SESSIONS_LOG nor --verbose is set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            page_size: None,
            pretty: false,
            log_level: default_log_level(),
        }
    }
}

impl SessionsConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| CoreError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
