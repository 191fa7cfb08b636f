//! List command implementation.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::format::format_issue_line;
use crate::session::Session;

/// Execute the list command.
///
/// Prints the current space's issues whose line contains `text`.
///
/// # Errors
///
/// Returns `Io` if the output cannot be written.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>, text: &str) -> Result<()> {
    let lines: Vec<String> = session
        .store()
        .list(session.space(), text, format_issue_line)
        .map(format_issue_line)
        .collect();

    for line in lines {
        session.say(line)?;
    }
    Ok(())
}
