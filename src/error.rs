//! Error types for `tira`.
//!
//! The library's `TiraError` covers both user mistakes at the prompt and
//! data integrity failures; see [`TiraError::is_user_error`].

pub use tira_lib::error::{Result, TiraError};
