//! Detached process creation.
//!
//! The game runs in its own console window - new, minimized, titled - and
//! the launcher never waits on it: no handle is retained and no timeout is
//! imposed. Window semantics only exist on Windows; the Unix path spawns a
//! detached process in a new process group.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

use std::path::Path;

use crate::activation::ActivatedEnv;
use crate::error::LaunchError;

/// Everything the spawn call needs, resolved ahead of time.
///
/// The interpreter is passed explicitly rather than relying on `PATH`
/// lookup, so a half-activated environment can never launch the wrong
/// Python.
#[derive(Debug)]
pub struct LaunchPlan<'a> {
    /// Venv Python interpreter.
    pub interpreter: &'a Path,
    /// Game entry script.
    pub script: &'a Path,
    /// Console window title.
    pub title: &'a str,
    /// Activation environment for the child.
    pub env: &'a ActivatedEnv,
}

/// Spawn the game process detached from the launcher. Returns the child PID.
///
/// The child inherits the launcher's working directory. Its stderr is
/// merged with its stdout: on Windows both streams target the fresh
/// console buffer, on Unix both inherit the launcher's stdout/stderr
/// terminal.
///
/// # Errors
///
/// Returns `LaunchError::Spawn` if the OS cannot create the process.
pub fn spawn_detached(plan: &LaunchPlan<'_>) -> Result<u32, LaunchError> {
    #[cfg(windows)]
    {
        windows::spawn(plan)
    }

    #[cfg(unix)]
    {
        unix::spawn(plan)
    }
}
