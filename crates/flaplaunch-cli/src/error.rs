//! Launcher error types and exit-code mapping.
//!
//! The failure taxonomy is deliberately small: either the virtual
//! environment could not be activated, or the operating system could not
//! create the game process. Both are terminal - there is no logic after
//! the spawn to recover into.

use flaplaunch_core::PathError;
use thiserror::Error;

/// Errors that abort the launch sequence.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The virtual environment is missing or incomplete.
    #[error("activation failed: {0}")]
    Activation(PathError),

    /// The OS could not create the game process, or the game script is
    /// missing.
    #[error("could not start the game: {0}")]
    Spawn(String),

    /// Writing the status banner to stdout failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl LaunchError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 64-78: Specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Activation(_) => 78, // EX_CONFIG
            LaunchError::Spawn(_) => 71,      // EX_OSERR
            LaunchError::Io(_) => 74,         // EX_IOERR
        }
    }
}

impl From<std::io::Error> for LaunchError {
    fn from(err: std::io::Error) -> Self {
        LaunchError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn every_failure_maps_to_a_nonzero_exit_code() {
        let activation =
            LaunchError::Activation(PathError::VenvNotFound(PathBuf::from("venv")));
        let spawn = LaunchError::Spawn("missing interpreter".into());
        let io = LaunchError::Io("broken pipe".into());

        assert_ne!(activation.exit_code(), 0);
        assert_ne!(spawn.exit_code(), 0);
        assert_ne!(io.exit_code(), 0);
    }

    #[test]
    fn activation_and_spawn_codes_differ() {
        let activation =
            LaunchError::Activation(PathError::VenvNotFound(PathBuf::from("venv")));
        let spawn = LaunchError::Spawn("denied".into());
        assert_ne!(activation.exit_code(), spawn.exit_code());
    }
}
