//! Config management use case

use crate::domain::SortKey;
use crate::error::{MoodjourError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "default_sort" => Ok(config.default_sort.to_string()),
            "recent_limit" => Ok(config.recent_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodjourError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: default_sort, recent_limit, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "default_sort" => {
                config.default_sort = SortKey::from_str(value).map_err(MoodjourError::Config)?;
            }
            "recent_limit" => {
                config.recent_limit = value.parse().map_err(|_| {
                    MoodjourError::Config(format!(
                        "Invalid recent_limit: '{}'. Expected a non-negative number",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(MoodjourError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodjourError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_sort, recent_limit",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
