//! Error types for `tira-lib`.
//!
//! User errors are reported at the prompt and the session carries on;
//! everything else means the store can no longer be trusted.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for tira operations.
#[derive(Error, Debug)]
pub enum TiraError {
    // === User Input Errors ===
    /// A key-based command was invoked without a key.
    #[error("Key is required")]
    KeyRequired,

    /// Neither the key nor its space-qualified form exists.
    #[error("Issue not found: {key}")]
    IssueNotFound { key: String },

    /// Space name is not two or three capital letters.
    #[error("Space must be two or three capital letters")]
    InvalidSpace { space: String },

    /// `find` was invoked without search text.
    #[error("Text to find is required")]
    TextRequired,

    /// The `spaces` filter matched nothing.
    #[error("No spaces found")]
    NoSpacesFound,

    /// The typed token matches no command.
    #[error("Invalid action: {action:?}")]
    InvalidAction { action: String },

    /// Every id in the space has been used.
    #[error("No ids left in space {space}")]
    SpaceExhausted { space: String },

    // === Data Integrity Errors ===
    /// Issue key is not `<SPACE>-<positive integer>`.
    #[error("Invalid issue key: {key}")]
    InvalidKey { key: String },

    /// The same key appears twice in the data file.
    #[error("Duplicate issue key: {key}")]
    DuplicateKey { key: String },

    /// Failed to parse a line in the JSONL file.
    #[error("JSONL parse error at line {line}: {reason}")]
    JsonlParse { line: usize, reason: String },

    /// The data file's parent directory could not be created.
    #[error("Cannot create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TiraError {
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::IssueNotFound { key: key.into() }
    }

    /// True for errors caused by what the user typed.
    ///
    /// The session prints these and keeps prompting; any other error
    /// terminates the session.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::KeyRequired
                | Self::IssueNotFound { .. }
                | Self::InvalidSpace { .. }
                | Self::TextRequired
                | Self::NoSpacesFound
                | Self::InvalidAction { .. }
                | Self::SpaceExhausted { .. }
        )
    }
}

/// Result type using `TiraError`.
pub type Result<T> = std::result::Result<T, TiraError>;
