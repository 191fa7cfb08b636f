//! Command-line interface for `tira`.
//!
//! Parses the process arguments with clap, then hands stdin/stdout to an
//! interactive [`Session`](crate::session::Session). The interactive
//! command handlers live in [`commands`].

pub mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tira_lib::DataFile;

use crate::config::{self, CliOverrides};
use crate::logging;
use crate::session::Session;

/// tira - interactive issue tracker.
#[derive(Parser, Debug)]
#[command(name = "tira")]
#[command(
    author,
    version,
    about = "Interactive single-user issue tracker",
    long_about = None,
    after_help = "Type `help` at the prompt for the list of actions."
)]
pub struct Cli {
    /// Path to the data file
    #[arg(long, value_name = "PATH", env = config::DATA_FILE_ENV, alias = "data_file")]
    pub data_file: Option<PathBuf>,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the data file cannot be
/// loaded or saved, or terminal I/O fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging()?;

    let settings = config::resolve(&CliOverrides {
        data_file: cli.data_file,
    })?;
    let display_path = dunce::simplified(&settings.data_file).display().to_string();
    tracing::info!(data_file = %display_path, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::open(
        DataFile::new(&settings.data_file),
        settings.default_space,
        stdin.lock(),
        stdout.lock(),
    )
    .with_context(|| format!("Failed to load {display_path}"))?;

    session
        .run()
        .with_context(|| format!("Session aborted ({display_path})"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_data_file_flag_and_alias() {
        let cli = Cli::try_parse_from(["tira", "--data-file", "a.jsonl"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("a.jsonl")));

        let cli = Cli::try_parse_from(["tira", "--data_file", "b.jsonl"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("b.jsonl")));
    }

    #[test]
    fn test_no_other_arguments() {
        assert!(Cli::try_parse_from(["tira", "list"]).is_err());
        assert!(Cli::try_parse_from(["tira", "--verbose"]).is_err());
    }
}
