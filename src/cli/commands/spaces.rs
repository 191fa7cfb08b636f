//! Spaces command implementation.

use std::io::{BufRead, Write};

use crate::error::{Result, TiraError};
use crate::session::Session;

/// Execute the spaces command.
///
/// Prints the distinct spaces, sorted and space-separated, optionally
/// limited to keys containing `text`.
///
/// # Errors
///
/// Returns `NoSpacesFound` if nothing matches.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>, text: &str) -> Result<()> {
    let spaces = session.store().distinct_spaces(text);
    if spaces.is_empty() {
        return Err(TiraError::NoSpacesFound);
    }

    let joined = spaces.into_iter().collect::<Vec<_>>().join(" ");
    session.say(joined)
}
