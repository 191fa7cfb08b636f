//! Show command implementation.

use std::io::{BufRead, Write};

use tira_lib::Issue;

use crate::error::Result;
use crate::format::format_issue_details;
use crate::session::Session;

/// Execute the show command.
///
/// # Errors
///
/// Returns `KeyRequired` or `IssueNotFound` if `key` does not resolve.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>, key: &str) -> Result<()> {
    let issue = session.store().find(key, session.space())?.clone();
    print_issue(session, &issue)
}

/// Print key, description and creation time on separate lines.
///
/// # Errors
///
/// Returns `Io` if the output cannot be written.
pub fn print_issue<R: BufRead, W: Write>(session: &mut Session<R, W>, issue: &Issue) -> Result<()> {
    for line in format_issue_details(issue) {
        session.say(line)?;
    }
    Ok(())
}
