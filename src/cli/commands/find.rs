//! Find command implementation.

use std::io::{BufRead, Write};

use tira_lib::Issue;

use super::show::print_issue;
use crate::error::{Result, TiraError};
use crate::format::format_issue_line;
use crate::session::Session;

/// Execute the find command.
///
/// Shows every issue in any space whose line contains `text`, asking after
/// each one whether to continue. `n` or end of input stops the search.
///
/// # Errors
///
/// Returns `TextRequired` if `text` is empty.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>, text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(TiraError::TextRequired);
    }

    // Snapshot the matches: answering the prompt needs the session mutably.
    let matches: Vec<Issue> = session
        .store()
        .search_all(text, format_issue_line)
        .cloned()
        .collect();
    tracing::debug!(text, matches = matches.len(), "find");

    for issue in &matches {
        session.say("")?;
        print_issue(session, issue)?;
        match session.ask("More? (Enter|n) ")? {
            Some(answer) if !answer.eq_ignore_ascii_case("n") => {}
            _ => break,
        }
    }
    Ok(())
}
