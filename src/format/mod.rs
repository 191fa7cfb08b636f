//! Output formatting for `tira`.
//!
//! Everything the session prints is plain, line-oriented text.

mod text;

pub use text::{
    LINE_TIME_FORMAT, SHOW_TIME_FORMAT, format_issue_details, format_issue_line,
    format_system_time, help_text, prompt,
};
