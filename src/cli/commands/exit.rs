//! Exit command implementation.

use std::io::{BufRead, Write};

use crate::session::Session;

/// Execute the exit command.
///
/// Only ends the loop; every change was already saved when it was made.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) {
    session.terminate();
}
