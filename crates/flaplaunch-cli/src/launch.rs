//! The launch sequence: banner, activation, spawn.
//!
//! Strictly linear - no branching beyond error propagation, no loops. The
//! three banner lines are always written before any spawn attempt, and the
//! game-script pre-flight check runs after the last banner line so a
//! missing script still produces the full banner before the diagnostic.

use std::io::Write;

use flaplaunch_core::{LauncherPaths, WINDOW_TITLE};
use tracing::info;

use crate::activation;
use crate::banner;
use crate::error::LaunchError;
use crate::spawn::{self, LaunchPlan};

/// Run the full launch sequence from the current working directory.
///
/// # Errors
///
/// See [`run_with`].
pub fn run(out: &mut impl Write) -> Result<u32, LaunchError> {
    let paths = LauncherPaths::resolve().map_err(LaunchError::Activation)?;
    run_with(&paths, out)
}

/// Run the launch sequence against pre-resolved paths. Returns the PID of
/// the detached game process; the launcher does not wait on it.
///
/// # Errors
///
/// - `LaunchError::Activation` if the venv or its interpreter is missing;
///   nothing has been spawned.
/// - `LaunchError::Spawn` if the game script is missing or the OS cannot
///   create the process; all banner lines have been emitted by then.
/// - `LaunchError::Io` if the banner cannot be written.
pub fn run_with(paths: &LauncherPaths, out: &mut impl Write) -> Result<u32, LaunchError> {
    banner::emit(out, banner::STARTING)?;
    banner::emit(out, banner::ACTIVATING)?;
    let env = activation::activate(paths)?;
    banner::emit(out, banner::LAUNCHING)?;
    out.flush()?;

    paths
        .verify_game_script()
        .map_err(|e| LaunchError::Spawn(e.to_string()))?;

    let plan = LaunchPlan {
        interpreter: &paths.interpreter,
        script: &paths.game_script,
        title: WINDOW_TITLE,
        env: &env,
    };
    let pid = spawn::spawn_detached(&plan)?;
    info!(pid, "game detached; launcher exiting");
    Ok(pid)
}
