//! Launcher entry point - the composition root.
//!
//! Parses the (empty) CLI surface, wires up tracing on stderr, and runs
//! the launch sequence. User-facing diagnostics go to stderr so the fixed
//! three-line stdout banner stays intact.

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flaplaunch_cli::{Cli, launch};

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let mut stdout = io::stdout();
    match launch::run(&mut stdout) {
        Ok(_pid) => {}
        Err(err) => {
            eprintln!("flaplaunch: {err}");
            process::exit(err.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stderr, never stdout: the banner contract owns stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}
