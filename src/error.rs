//! Error types for moodjour

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodjour
#[derive(Debug, Error)]
pub enum MoodjourError {
    #[error("Not a moodjour directory: {0}")]
    NotMoodjourDirectory(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entry not found: {0}")]
    NotFound(i64),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoodjourError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodjourError::NotMoodjourDirectory(_) => 2,
            MoodjourError::NotFound(_) => 3,
            MoodjourError::Validation(_) => 4,
            MoodjourError::Persistence(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodjourError::NotMoodjourDirectory(path) => {
                format!(
                    "Not a moodjour directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodjour init' in this directory to create a new journal\n\
                    • Navigate to an existing moodjour directory\n\
                    • Set MOODJOUR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodjourError::NotFound(id) => {
                format!(
                    "Entry {} no longer exists\n\n\
                    Suggestions:\n\
                    • Use 'moodjour list' to see the ids of existing entries",
                    id
                )
            }
            MoodjourError::Validation(msg) => {
                if msg.contains("mood") {
                    format!(
                        "{}\n\n\
                        Valid moods: Feliz, Triste, Ansioso, Relaxado, Irritado, Energético, Cansado, Inspirado\n\
                        (English names such as happy or tired are accepted too; see 'moodjour moods')",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            MoodjourError::Persistence(msg) => {
                format!(
                    "{}\n\n\
                    Nothing was saved. Check that the journal's .moodjour/storage directory \
                    is writable and the disk is not full.",
                    msg
                )
            }
            MoodjourError::Config(msg) => {
                if msg.contains("sort") {
                    format!(
                        "{}\n\n\
                        Valid sort keys: date, mood\n\
                        Example: moodjour config default_sort mood",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodjourError
pub type Result<T> = std::result::Result<T, MoodjourError>;
