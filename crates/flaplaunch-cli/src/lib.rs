//! Library surface of the `flaplaunch` binary.
//!
//! `main.rs` is the composition root; everything else lives here so the
//! launch sequence can be exercised by integration tests without spawning
//! the binary itself.

pub mod activation;
pub mod banner;
pub mod error;
pub mod launch;
pub mod parser;
pub mod spawn;

// Re-export primary types for convenient access
pub use error::LaunchError;
pub use parser::Cli;
