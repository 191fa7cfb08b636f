//! Edit command implementation.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::session::Session;

/// Execute the edit command.
///
/// Shows the current description and asks for a replacement; an empty
/// answer keeps it.
///
/// # Errors
///
/// Returns `KeyRequired` or `IssueNotFound` if `key` does not resolve, or
/// an error if the prompt fails or the store cannot be saved.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>, key: &str) -> Result<()> {
    let issue = session.store().find(key, session.space())?.clone();

    session.say(format_args!("Editing issue {}", issue.key))?;
    session.say(format_args!("Description: {}", issue.description))?;
    let answer = session
        .ask("New description (Enter=no change): ")?
        .unwrap_or_default();

    if session.store_mut().update_description(&issue.key, &answer)? {
        session.persist()?;
        session.say(format_args!("Edited issue {}", issue.key))
    } else {
        session.say(format_args!("No changes to {}", issue.key))
    }
}
