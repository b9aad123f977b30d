//! Virtual environment layout.
//!
//! CPython's `venv` module places the activation script and interpreter
//! under `Scripts/` on Windows and `bin/` everywhere else; the interpreter
//! binary name differs the same way.

use std::path::{Path, PathBuf};

/// Virtual environment directory, relative to the launcher root.
pub const VENV_DIR_RELATIVE: &str = "venv";

/// Directory inside the venv holding the activation script and interpreter.
pub fn scripts_dir(venv_dir: &Path) -> PathBuf {
    #[cfg(target_os = "windows")]
    let dir_name = "Scripts";

    #[cfg(not(target_os = "windows"))]
    let dir_name = "bin";

    venv_dir.join(dir_name)
}

/// Path to the venv activation script.
pub fn activate_path(venv_dir: &Path) -> PathBuf {
    scripts_dir(venv_dir).join("activate")
}

/// Path to the venv Python interpreter.
pub fn interpreter_path(venv_dir: &Path) -> PathBuf {
    #[cfg(target_os = "windows")]
    let binary_name = "python.exe";

    #[cfg(not(target_os = "windows"))]
    let binary_name = "python";

    scripts_dir(venv_dir).join(binary_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_script_lives_in_scripts_dir() {
        let venv = Path::new("venv");
        let activate = activate_path(venv);
        assert!(activate.starts_with(scripts_dir(venv)));
        assert_eq!(activate.file_name().and_then(|n| n.to_str()), Some("activate"));
    }

    #[test]
    fn interpreter_lives_in_scripts_dir() {
        let venv = Path::new("venv");
        let interpreter = interpreter_path(venv);
        assert!(interpreter.starts_with(scripts_dir(venv)));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn unix_layout_uses_bin() {
        let venv = Path::new("venv");
        assert_eq!(scripts_dir(venv), Path::new("venv/bin"));
        assert_eq!(interpreter_path(venv), Path::new("venv/bin/python"));
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn windows_layout_uses_scripts() {
        let venv = Path::new("venv");
        assert_eq!(scripts_dir(venv), Path::new("venv/Scripts"));
        assert_eq!(interpreter_path(venv), Path::new("venv/Scripts/python.exe"));
    }
}
