//! Unix spawn path.
//!
//! There is no console-window concept here, so "new minimized window"
//! degrades to "detached process": a new process group keeps terminal
//! signals aimed at the launcher from reaching the game.

use std::os::unix::process::CommandExt;
use std::process::Command;

use tracing::debug;

use super::LaunchPlan;
use crate::error::LaunchError;

pub(super) fn spawn(plan: &LaunchPlan<'_>) -> Result<u32, LaunchError> {
    let mut cmd = Command::new(plan.interpreter);
    cmd.arg(plan.script)
        .env("PATH", &plan.env.path)
        .env("VIRTUAL_ENV", &plan.env.virtual_env);
    for name in plan.env.removals {
        cmd.env_remove(name);
    }

    // Detach: the game outlives the launcher and never sees its signals.
    // Inherited stdout/stderr land on the same terminal, which is the
    // closest analogue of the merged-stream console window on Windows.
    cmd.process_group(0);

    let child = cmd
        .spawn()
        .map_err(|e| LaunchError::Spawn(e.to_string()))?;
    let pid = child.id();
    debug!(pid, "game process started");
    Ok(pid)
}
