//! Core path resolution for the Flappy Bird launcher.
//!
//! This crate answers one question: given a launcher root, where do the
//! virtual environment, its interpreter, and the game script live? No
//! terminal I/O and no process spawning happen here - those belong to the
//! CLI adapter.

pub mod paths;

// Re-export commonly used types for convenience
pub use paths::{
    GAME_SCRIPT_RELATIVE, LauncherPaths, PathError, VENV_DIR_RELATIVE, WINDOW_TITLE,
};
