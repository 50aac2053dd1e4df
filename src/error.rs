//! Error types for todotags

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for todotags
#[derive(Debug, Error)]
pub enum TodoTagsError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid todo: {0}")]
    InvalidTodo(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TodoTagsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TodoTagsError::ConfigNotFound(_) => 2,
            TodoTagsError::InvalidDate(_) => 3,
            TodoTagsError::InvalidTodo(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TodoTagsError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Unset TODOTAGS_CONFIG to fall back to ./todotags.toml\n\
                    • Run without a config to use the default tag names (t, due)",
                    path.display()
                )
            }
            TodoTagsError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: todotags dates \"call mom due:2025-01-17\" --today 2025-01-15",
                    value
                )
            }
            TodoTagsError::InvalidTodo(line) => {
                format!(
                    "Invalid todo: '{}'\n\n\
                    Suggestions:\n\
                    • Pass the todo text as a single quoted argument\n\
                    • A todo must contain some text besides its markers",
                    line
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TodoTagsError
pub type Result<T> = std::result::Result<T, TodoTagsError>;
