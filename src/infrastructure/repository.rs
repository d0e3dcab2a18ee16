//! Journal directory discovery and layout

use crate::error::{MoodjourError, Result};
use crate::infrastructure::{Config, FileSystemStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Load configuration from .moodjour/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodjour/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Create .moodjour directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODJOUR_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODJOUR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodjour_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodjourError::Config(format!(
                    "MOODJOUR_ROOT is set to '{}' but no .moodjour directory found. \
                    Run 'moodjour init' in that directory or unset MOODJOUR_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodjour_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MoodjourError::NotMoodjourDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Key-value storage for this journal (`.moodjour/storage`)
    pub fn storage(&self) -> FileSystemStorage {
        FileSystemStorage::new(self.root.join(".moodjour").join("storage"))
    }

    fn has_moodjour_dir(path: &Path) -> bool {
        path.join(".moodjour").is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let moodjour_dir = self.root.join(".moodjour");

        if moodjour_dir.exists() {
            return Err(MoodjourError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodjour_dir)?;
        fs::create_dir(moodjour_dir.join("storage"))?;
        Ok(())
    }
}
