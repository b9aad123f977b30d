//! Main CLI parser.
//!
//! Running with no arguments is the only launch mode; flags only tune
//! diagnostics.

use clap::Parser;

/// Command-line interface definition for the Flappy Bird launcher.
#[derive(Parser)]
#[command(name = "flaplaunch")]
#[command(about = "Launch Flappy Bird in its bundled virtual environment")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
