//! Interactive command handlers.
//!
//! Each handler receives the session and the command's arguments joined
//! with single spaces. Handlers that change the store save it before
//! returning.

pub mod add;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod show;
pub mod space;
pub mod spaces;

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::session::{Command, Session};

/// Run the handler for `command`.
///
/// # Errors
///
/// Propagates the handler's error.
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    session: &mut Session<R, W>,
    text: &str,
) -> Result<()> {
    match command {
        Command::Add => add::execute(session, text),
        Command::List => list::execute(session, text),
        Command::Show => show::execute(session, text),
        Command::Delete => delete::execute(session, text),
        Command::Edit => edit::execute(session, text),
        Command::Exit => {
            exit::execute(session);
            Ok(())
        }
        Command::Help => help::execute(session),
        Command::Space => space::execute(session, text),
        Command::Spaces => spaces::execute(session, text),
        Command::Find => find::execute(session, text),
    }
}
