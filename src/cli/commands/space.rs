//! Space command implementation.

use std::io::{BufRead, Write};

use tira_lib::Space;

use crate::error::Result;
use crate::session::Session;

/// Execute the space command.
///
/// # Errors
///
/// Returns `InvalidSpace` unless `name` is two or three capital letters.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>, name: &str) -> Result<()> {
    let space: Space = name.parse()?;
    session.set_space(space);
    Ok(())
}
