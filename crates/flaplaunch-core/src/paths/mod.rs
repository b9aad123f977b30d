//! Path utilities for the launcher's fixed file-system layout.
//!
//! This module provides the canonical path resolution for everything the
//! launcher touches:
//! - The virtual environment directory and its activation script
//! - The venv Python interpreter
//! - The game entry script
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - the CLI adapter handles user output
//! - OS-specific layout differences are kept private in `venv`

mod error;
mod game;
mod resolver;
mod venv;

// Re-export public API

// Error type
pub use error::PathError;

// Game script and window metadata
pub use game::{GAME_SCRIPT_RELATIVE, WINDOW_TITLE};

// Venv layout
pub use venv::{VENV_DIR_RELATIVE, activate_path, interpreter_path, scripts_dir};

// Pure resolver for the launch sequence and tests
pub use resolver::LauncherPaths;
