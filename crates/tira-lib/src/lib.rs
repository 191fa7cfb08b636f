//! `tira-lib` - issue store and snapshot persistence for the `tira` tracker.
//!
//! Issues live in memory and are persisted as a complete JSONL snapshot.
//! The [`DataFile`] adapter remembers the file's modification time so a
//! session can notice when another process rewrote it.
//!
//! # Quick Start
//!
//! ```no_run
//! use tira_lib::{DataFile, Space};
//!
//! let mut data_file = DataFile::new("path/to/tira_data.jsonl");
//! let mut store = data_file.load().unwrap();
//!
//! let space = Space::default();
//! let issue = store.create(&space, "Fix login bug").unwrap();
//! assert_eq!(issue.key, "TI-1");
//!
//! data_file.save(&store).unwrap();
//! ```

pub mod datafile;
pub mod error;
pub mod jsonl;
pub mod model;
pub mod store;

pub use datafile::DataFile;
pub use error::{Result, TiraError};
pub use model::{Issue, Space};
pub use store::InMemoryStore;
