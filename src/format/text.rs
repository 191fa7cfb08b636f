//! Text formatting functions for `tira`.
//!
//! Provides:
//! - Issue list lines and the `show` block
//! - File timestamps for the external-change notice
//! - The prompt and help text

use std::time::SystemTime;

use chrono::{DateTime, Local};
use tira_lib::{Issue, Space};

/// Timestamp layout in list lines.
pub const LINE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Timestamp layout for `show`.
pub const SHOW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const MTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// The prompt shown before each input line.
#[must_use]
pub fn prompt(space: &Space) -> String {
    format!("tira: {space}> ")
}

/// Format a single-line issue summary.
///
/// Format: `{key}\t{YYYY-MM-DD HH:MM}\t"{description}"`, with the
/// description quoted and escaped. `list` and `find` filter on this line.
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{}\t{}\t{:?}",
        issue.key,
        issue.created.with_timezone(&Local).format(LINE_TIME_FORMAT),
        issue.description,
    )
}

/// Lines printed by `show`: key, description, creation time.
#[must_use]
pub fn format_issue_details(issue: &Issue) -> [String; 3] {
    [
        issue.key.clone(),
        issue.description.clone(),
        issue
            .created
            .with_timezone(&Local)
            .format(SHOW_TIME_FORMAT)
            .to_string(),
    ]
}

/// Render a file modification time, or `none` when unknown.
#[must_use]
pub fn format_system_time(time: Option<SystemTime>) -> String {
    time.map_or_else(
        || "none".to_string(),
        |t| DateTime::<Local>::from(t).format(MTIME_FORMAT).to_string(),
    )
}

/// Command summary followed by the current space.
#[must_use]
pub fn help_text(space: &Space) -> String {
    format!(
        "Valid actions:
\tadd [<text>]     Add a new issue.
\tlist [<text>]    List issues in the current space.
\tshow <key>       Show an issue.
\tdelete <key>     Delete an issue.
\tedit <key>       Edit an issue.
\texit             Exit the program.
\thelp             Show this help.
\tspace <space>    Set the space for new issues.
\tspaces [<text>]  List spaces.
\tfind <text>      Find issues in all spaces that contain the text.

Current space: {space}"
    )
}
