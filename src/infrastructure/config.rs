//! Configuration management

use crate::domain::SortKey;
use crate::error::{MoodjourError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_recent_limit() -> usize {
    3
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Order used by `list` when no `--sort` is given
    #[serde(default)]
    pub default_sort: SortKey,
    /// Number of entries shown by `recent`
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            default_sort: SortKey::default(),
            recent_limit: default_recent_limit(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodjour/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodjour").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodjourError::NotMoodjourDirectory(path.to_path_buf())
            } else {
                MoodjourError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodjourError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodjour/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodjour_dir = path.join(".moodjour");
        let config_path = moodjour_dir.join("config.toml");

        if !moodjour_dir.exists() {
            fs::create_dir(&moodjour_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodjourError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
