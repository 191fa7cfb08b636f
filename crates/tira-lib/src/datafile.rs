//! The backing data file and its change baseline.
//!
//! External writes are detected by comparing the file's modification time
//! against the value recorded at the last load or save. This is a coarse,
//! racy check: another process can still write between the check and the
//! next save, and filesystems with low timestamp resolution can hide a
//! rewrite. Last writer wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Result;
use crate::jsonl;
use crate::store::InMemoryStore;

/// Snapshot file holding the whole store.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
    baseline: Option<SystemTime>,
}

impl DataFile {
    /// Point at `path` without touching the filesystem.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            baseline: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Modification time recorded at the last successful load or save.
    #[must_use]
    pub const fn baseline(&self) -> Option<SystemTime> {
        self.baseline
    }

    /// Current modification time on disk, `None` if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file's metadata cannot be read.
    pub fn modified(&self) -> Result<Option<SystemTime>> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(Some(meta.modified()?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Load the store, or an empty store if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Io`/`JsonlParse` if the file exists but cannot be read, and
    /// `InvalidKey`/`DuplicateKey` if its contents break the key invariant.
    pub fn load(&mut self) -> Result<InMemoryStore> {
        let Some(modified) = self.modified()? else {
            tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
            self.baseline = None;
            return Ok(InMemoryStore::new());
        };

        let store = InMemoryStore::from_issues(jsonl::load(&self.path)?)?;
        self.baseline = Some(modified);
        tracing::debug!(path = %self.path.display(), issues = store.len(), "loaded data file");
        Ok(store)
    }

    /// Overwrite the file with the full contents of `store`.
    ///
    /// # Errors
    ///
    /// Returns `CreateDir` if the parent directory cannot be created, or
    /// `Io` if writing fails.
    pub fn save(&mut self, store: &InMemoryStore) -> Result<()> {
        jsonl::save(&self.path, store.iter())?;
        self.baseline = self.modified()?;
        tracing::debug!(path = %self.path.display(), issues = store.len(), "saved data file");
        Ok(())
    }

    /// Whether the file was written by someone else since our last load or
    /// save.
    ///
    /// A missing file never counts as a change.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file's metadata cannot be read.
    pub fn has_external_change(&self) -> Result<bool> {
        Ok(match self.modified()? {
            None => false,
            Some(current) => self.baseline != Some(current),
        })
    }
}
