//! Delete command implementation.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::session::Session;

/// Execute the delete command.
///
/// # Errors
///
/// Returns `KeyRequired` or `IssueNotFound` if `key` does not resolve, or
/// an error if the store cannot be saved.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>, key: &str) -> Result<()> {
    let resolved = session.store().find(key, session.space())?.key.clone();

    session.store_mut().delete(&resolved)?;
    session.persist()?;

    session.say(format_args!("Deleted issue {resolved}"))
}
