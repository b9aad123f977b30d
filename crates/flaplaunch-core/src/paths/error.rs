//! Path-related error types.
//!
//! Provides semantic errors for path resolution and validation without
//! exposing adapter-specific concerns.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution and validation.
#[derive(Debug, Error)]
pub enum PathError {
    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),

    /// The virtual environment directory does not exist.
    #[error("Virtual environment not found at {0}")]
    VenvNotFound(PathBuf),

    /// The venv activation script does not exist.
    #[error("Activation script not found at {0}")]
    ActivateNotFound(PathBuf),

    /// The venv Python interpreter does not exist.
    #[error("Python interpreter not found at {0}")]
    InterpreterNotFound(PathBuf),

    /// The game entry script does not exist.
    #[error("Game script not found at {0}")]
    GameScriptNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_path() {
        let err = PathError::ActivateNotFound(PathBuf::from("venv/bin/activate"));
        assert!(err.to_string().contains("venv"));

        let err = PathError::GameScriptNotFound(PathBuf::from("Source Code/control.py"));
        assert!(err.to_string().contains("control.py"));
    }
}
