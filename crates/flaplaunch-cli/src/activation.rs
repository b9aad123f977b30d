//! Virtual environment activation.
//!
//! The original launcher sourced `venv/Scripts/activate`, mutating ambient
//! process state so that `python` resolved to the venv interpreter.
//! Activation here is an explicit, scoped value instead: the venv scripts
//! directory is prepended to `PATH`, `VIRTUAL_ENV` is set, and
//! `PYTHONHOME` is dropped - the same edits the activate script performs -
//! and the resolved interpreter path is handed straight to the spawn call.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use flaplaunch_core::LauncherPaths;
use tracing::debug;

use crate::error::LaunchError;

/// Variables the activate script unsets; they must not leak to the game.
pub const REMOVALS: &[&str] = &["PYTHONHOME"];

/// Environment changes the game process must see.
#[derive(Debug, Clone)]
pub struct ActivatedEnv {
    /// Replacement `PATH` value with the venv scripts directory first.
    pub path: OsString,
    /// `VIRTUAL_ENV` value (the venv root).
    pub virtual_env: PathBuf,
    /// Variables to remove from the game's environment.
    pub removals: &'static [&'static str],
}

impl ActivatedEnv {
    /// Build from the launcher's own environment.
    pub fn from_current(paths: &LauncherPaths) -> Self {
        Self::with_base_path(paths, env::var_os("PATH"))
    }

    /// Build with an explicit base `PATH` (used by tests).
    pub fn with_base_path(paths: &LauncherPaths, base_path: Option<OsString>) -> Self {
        let mut entries = vec![paths.scripts_dir.clone()];
        if let Some(existing) = base_path {
            entries.extend(env::split_paths(&existing));
        }
        let path = env::join_paths(entries)
            .unwrap_or_else(|_| paths.scripts_dir.clone().into_os_string());

        Self {
            path,
            virtual_env: paths.venv_dir.clone(),
            removals: REMOVALS,
        }
    }
}

/// Validate the venv and compute the game's environment.
///
/// # Errors
///
/// Returns `LaunchError::Activation` if the venv directory, its activation
/// script, or its interpreter is missing. Nothing is spawned in that case.
pub fn activate(paths: &LauncherPaths) -> Result<ActivatedEnv, LaunchError> {
    paths.verify_activation().map_err(LaunchError::Activation)?;
    debug!(venv = %paths.venv_dir.display(), "virtual environment verified");
    Ok(ActivatedEnv::from_current(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    #[test]
    fn scripts_dir_is_prepended_to_path() {
        let paths = LauncherPaths::resolve_from(Path::new("/launcher"));
        let base = env::join_paths([Path::new("/usr/bin"), Path::new("/bin")]).expect("join");
        let env = ActivatedEnv::with_base_path(&paths, Some(base));

        let resolved: Vec<PathBuf> = env::split_paths(&env.path).collect();
        assert_eq!(resolved[0], paths.scripts_dir);
        assert!(resolved.contains(&PathBuf::from("/usr/bin")));
        assert!(resolved.contains(&PathBuf::from("/bin")));
    }

    #[test]
    fn empty_base_path_still_resolves_the_venv() {
        let paths = LauncherPaths::resolve_from(Path::new("/launcher"));
        let env = ActivatedEnv::with_base_path(&paths, None);

        let resolved: Vec<PathBuf> = env::split_paths(&env.path).collect();
        assert_eq!(resolved, vec![paths.scripts_dir.clone()]);
    }

    #[test]
    fn virtual_env_points_at_the_venv_root() {
        let paths = LauncherPaths::resolve_from(Path::new("/launcher"));
        let env = ActivatedEnv::with_base_path(&paths, None);
        assert_eq!(env.virtual_env, paths.venv_dir);
    }

    #[test]
    fn pythonhome_is_scheduled_for_removal() {
        let paths = LauncherPaths::resolve_from(Path::new("/launcher"));
        let env = ActivatedEnv::with_base_path(&paths, None);
        assert!(env.removals.contains(&"PYTHONHOME"));
    }

    #[test]
    fn activate_rejects_an_incomplete_venv() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = LauncherPaths::resolve_from(dir.path());

        // Venv dir exists but has no activate script.
        fs::create_dir_all(&paths.scripts_dir).expect("scripts dir");
        let err = activate(&paths).expect_err("should fail");
        assert!(matches!(err, LaunchError::Activation(_)));
    }
}
