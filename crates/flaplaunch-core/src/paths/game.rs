//! Game script location and window metadata.
//!
//! Both values are launch-time literals: the launcher has no configuration
//! surface beyond them.

/// Game entry script, relative to the launcher root.
pub const GAME_SCRIPT_RELATIVE: &str = "Source Code/control.py";

/// Title of the console window the game runs in.
pub const WINDOW_TITLE: &str = "Flappy Bird";
