//! Add command implementation.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::session::Session;

/// Execute the add command.
///
/// Uses `text` as the description, or asks for one when it is empty.
///
/// # Errors
///
/// Returns `SpaceExhausted` if the current space has no ids left, or an
/// error if the prompt fails or the store cannot be saved.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>, text: &str) -> Result<()> {
    let description = if text.is_empty() {
        session.ask("Description: ")?.unwrap_or_default()
    } else {
        text.to_string()
    };

    let space = session.space().clone();
    let issue = session.store_mut().create(&space, description)?;
    session.persist()?;

    session.say(format_args!("Added issue {}", issue.key))
}
