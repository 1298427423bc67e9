#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::utils::logging::DEFAULT_FILTER;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Document title used when the destination route declares none.
    pub default_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub token_key: String,
    pub user_key: String,
    /// File backing the session keys on desktop, relative to the app directory.
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_title: "评论管理系统@goatyang.com".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: "user_token".to_string(),
            user_key: "user_info".to_string(),
            file_name: "session.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Parses a config document. Absent fields fall back to their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads the config at `path`, using defaults when the file is missing
    /// or unreadable.
    ///
    /// Runs before the logger exists, so problems are returned alongside
    /// the config for the caller to report once logging is up.
    pub fn load_or_default(path: &Path) -> (Self, Option<anyhow::Error>) {
        if !path.exists() {
            return (Self::default(), None);
        }

        let loaded = std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|json| Self::from_json(&json))
            .map_err(|e| e.context(format!("Failed to load {}", path.display())));

        match loaded {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
