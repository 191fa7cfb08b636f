//! `tira` - interactive issue tracker
//!
//! This crate provides the `tira` binary: a prompt-driven loop over an
//! in-memory issue store that is saved to disk after every change.
//!
//! # Architecture
//!
//! - [`cli`] - Process arguments (clap) and the interactive command handlers
//! - [`session`] - Session loop, command registry, external change detection
//! - [`config`] - Data file location and the optional YAML config file
//! - [`format`] - Text rendering of issues, timestamps and help
//! - [`logging`] - `tracing` subscriber setup
//! - [`error`] - Error types (re-exported from `tira-lib`)
//!
//! Storage, key allocation and the issue model live in `tira-lib`.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod session;

pub use error::{Result, TiraError};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the data file cannot be
/// loaded or saved, or terminal I/O fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
