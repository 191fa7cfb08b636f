//! Help command implementation.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::format::help_text;
use crate::session::Session;

/// Execute the help command.
///
/// # Errors
///
/// Returns `Io` if the output cannot be written.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let text = help_text(session.space());
    session.say(text)
}
