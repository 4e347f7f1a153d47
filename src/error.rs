// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("Unsupported OS: {0}")]
    UnsupportedPlatform(String),

    #[error("Invalid file name: {0}")]
    InvalidFile(String),

    #[error("Path {0} is taken")]
    PathTaken(String),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// The command ran but exited unsuccessfully. `code` is `None` when the
    /// process was killed by a signal.
    #[error("Command `{command}` failed with status {}", status_label(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Input closed")]
    InputClosed,

    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BrowseError {
    /// Errors an action can recover from by printing them and returning to the menu.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BrowseError::InvalidFile(_)
                | BrowseError::PathTaken(_)
                | BrowseError::CommandNotFound(_)
                | BrowseError::CommandFailed { .. }
                | BrowseError::Io(_)
        )
    }
}

fn status_label(code: &Option<i32>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string())
}

pub type Result<T> = std::result::Result<T, BrowseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_raw_input() {
        assert_eq!(BrowseError::InvalidFile("missing.txt".into()).to_string(), "Invalid file name: missing.txt");
        assert_eq!(BrowseError::PathTaken("b.txt".into()).to_string(), "Path b.txt is taken");
    }

    #[test]
    fn test_command_failed_without_code() {
        let err = BrowseError::CommandFailed { command: "cp a b".into(), code: None };
        assert_eq!(err.to_string(), "Command `cp a b` failed with status unknown");
        assert!(err.is_recoverable());
        assert!(!BrowseError::InputClosed.is_recoverable());
    }
}
