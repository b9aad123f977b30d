//! Fixed startup banner.
//!
//! The launcher's stdout contract is exactly these three lines, in this
//! order, all emitted before any spawn attempt. Diagnostics go to stderr
//! so the contract holds under redirection.

use std::io::{self, Write};

/// First banner line.
pub const STARTING: &str = "Starting Flappy Bird...";

/// Second banner line.
pub const ACTIVATING: &str = "Activating virtual environment...";

/// Third banner line.
pub const LAUNCHING: &str = "Launching game window...";

/// Write one banner line to the given sink.
pub fn emit(out: &mut impl Write, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")
}
