//! Pure path resolver for the launch sequence.
//!
//! This module provides a single struct that captures all resolved paths
//! in one call, making the launch sequence testable against fixture trees
//! and keeping path logic out of the spawn code.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::game::GAME_SCRIPT_RELATIVE;
use super::venv::{self, VENV_DIR_RELATIVE};

/// All launcher paths captured in a single struct.
///
/// This is the single source of truth for where the venv, the interpreter,
/// and the game script live relative to the launcher root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherPaths {
    /// Launcher root (the working directory at invocation).
    pub root: PathBuf,
    /// Virtual environment directory.
    pub venv_dir: PathBuf,
    /// Directory holding the activation script and interpreter.
    pub scripts_dir: PathBuf,
    /// Venv activation script.
    pub activate_script: PathBuf,
    /// Venv Python interpreter.
    pub interpreter: PathBuf,
    /// Game entry script.
    pub game_script: PathBuf,
}

impl LauncherPaths {
    /// Resolve all paths from the current working directory.
    ///
    /// # Errors
    ///
    /// Returns `PathError::CurrentDirError` if the working directory cannot
    /// be determined.
    pub fn resolve() -> Result<Self, PathError> {
        let root =
            env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;
        Ok(Self::resolve_from(&root))
    }

    /// Resolve all paths from an explicit root.
    ///
    /// Pure function of the root - no file-system access. Use
    /// [`LauncherPaths::verify_activation`] and
    /// [`LauncherPaths::verify_game_script`] for existence checks.
    pub fn resolve_from(root: &Path) -> Self {
        let venv_dir = root.join(VENV_DIR_RELATIVE);
        Self {
            root: root.to_path_buf(),
            scripts_dir: venv::scripts_dir(&venv_dir),
            activate_script: venv::activate_path(&venv_dir),
            interpreter: venv::interpreter_path(&venv_dir),
            game_script: root.join(GAME_SCRIPT_RELATIVE),
            venv_dir,
        }
    }

    /// Check that the activation resources exist.
    ///
    /// A venv without its activation script or interpreter is treated the
    /// same as a missing venv: the launch must abort before any spawn
    /// attempt, since continuing would start the game against the wrong
    /// interpreter.
    ///
    /// # Errors
    ///
    /// Returns the first missing piece as a semantic `PathError`.
    pub fn verify_activation(&self) -> Result<(), PathError> {
        if !self.venv_dir.is_dir() {
            return Err(PathError::VenvNotFound(self.venv_dir.clone()));
        }
        if !self.activate_script.is_file() {
            return Err(PathError::ActivateNotFound(self.activate_script.clone()));
        }
        if !self.interpreter.is_file() {
            return Err(PathError::InterpreterNotFound(self.interpreter.clone()));
        }
        Ok(())
    }

    /// Check that the game entry script exists.
    ///
    /// # Errors
    ///
    /// Returns `PathError::GameScriptNotFound` if the script is absent.
    pub fn verify_game_script(&self) -> Result<(), PathError> {
        if self.game_script.is_file() {
            Ok(())
        } else {
            Err(PathError::GameScriptNotFound(self.game_script.clone()))
        }
    }
}

impl fmt::Display for LauncherPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "root = {}", self.root.display())?;
        writeln!(f, "venv_dir = {}", self.venv_dir.display())?;
        writeln!(f, "activate_script = {}", self.activate_script.display())?;
        writeln!(f, "interpreter = {}", self.interpreter.display())?;
        write!(f, "game_script = {}", self.game_script.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn resolution_is_deterministic() {
        let root = Path::new("/launcher");
        assert_eq!(
            LauncherPaths::resolve_from(root),
            LauncherPaths::resolve_from(root),
            "path resolution should be deterministic"
        );
    }

    #[test]
    fn everything_resolves_under_the_root() {
        let root = Path::new("/launcher");
        let paths = LauncherPaths::resolve_from(root);

        assert!(paths.venv_dir.starts_with(root));
        assert!(paths.scripts_dir.starts_with(&paths.venv_dir));
        assert!(paths.activate_script.starts_with(&paths.scripts_dir));
        assert!(paths.interpreter.starts_with(&paths.scripts_dir));
        assert!(paths.game_script.starts_with(root));
    }

    #[test]
    fn verify_activation_reports_first_missing_piece() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = LauncherPaths::resolve_from(dir.path());

        assert!(matches!(
            paths.verify_activation(),
            Err(PathError::VenvNotFound(_))
        ));

        fs::create_dir_all(&paths.scripts_dir).expect("scripts dir");
        assert!(matches!(
            paths.verify_activation(),
            Err(PathError::ActivateNotFound(_))
        ));

        fs::write(&paths.activate_script, "# activate\n").expect("activate");
        assert!(matches!(
            paths.verify_activation(),
            Err(PathError::InterpreterNotFound(_))
        ));

        fs::write(&paths.interpreter, "").expect("interpreter");
        assert!(paths.verify_activation().is_ok());
    }

    #[test]
    fn verify_game_script_requires_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = LauncherPaths::resolve_from(dir.path());

        assert!(matches!(
            paths.verify_game_script(),
            Err(PathError::GameScriptNotFound(_))
        ));

        fs::create_dir_all(paths.game_script.parent().expect("parent")).expect("source dir");
        fs::write(&paths.game_script, "print('ok')\n").expect("script");
        assert!(paths.verify_game_script().is_ok());
    }

    #[test]
    fn display_format_is_parseable() {
        let paths = LauncherPaths::resolve_from(Path::new("/launcher"));
        let output = paths.to_string();

        // Should contain key = value pairs
        assert!(output.contains("root = "));
        assert!(output.contains("venv_dir = "));
        assert!(output.contains("activate_script = "));
        assert!(output.contains("interpreter = "));
        assert!(output.contains("game_script = "));
    }
}
