//! In-memory issue store backed by `HashMap`.
//!
//! Keeps issues in insertion order and hands out keys per space.

use std::collections::{BTreeSet, HashMap};

use crate::error::{Result, TiraError};
use crate::model::{Issue, Space, split_key};

/// In-memory tira issue store.
///
/// All data lives in memory; persistence is handled by
/// [`DataFile`](crate::DataFile), which writes the whole store at once.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    issues: HashMap<String, Issue>,
    order: Vec<String>,
    /// Highest id handed out per space during this process lifetime.
    issued: HashMap<String, u64>,
}

impl InMemoryStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from issues in file order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for a malformed key or `DuplicateKey` if a key
    /// appears twice.
    pub fn from_issues(issues: impl IntoIterator<Item = Issue>) -> Result<Self> {
        let mut store = Self::new();
        for issue in issues {
            if split_key(&issue.key).is_none() {
                return Err(TiraError::InvalidKey { key: issue.key });
            }
            if store.issues.contains_key(&issue.key) {
                return Err(TiraError::DuplicateKey { key: issue.key });
            }
            store.order.push(issue.key.clone());
            store.issues.insert(issue.key.clone(), issue);
        }
        Ok(store)
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Create a new issue in `space`.
    ///
    /// The id is one more than the highest id seen in that space, either in
    /// the stored keys or handed out earlier in this session, so a deleted
    /// key is never reissued before the next reload.
    ///
    /// # Errors
    ///
    /// Returns `SpaceExhausted` if the highest id in `space` is already
    /// `u64::MAX`.
    pub fn create(&mut self, space: &Space, description: impl Into<String>) -> Result<Issue> {
        let id = self.next_id(space)?;
        self.issued.insert(space.as_str().to_string(), id);

        let issue = Issue::new(space.qualify(&id.to_string()), description);
        tracing::debug!(key = %issue.key, "created issue");

        self.order.push(issue.key.clone());
        self.issues.insert(issue.key.clone(), issue.clone());
        Ok(issue)
    }

    /// The id the next `create` in `space` will use.
    ///
    /// # Errors
    ///
    /// Returns `SpaceExhausted` when no id is left in `space`.
    pub fn next_id(&self, space: &Space) -> Result<u64> {
        let stored = self
            .issues
            .keys()
            .filter_map(|key| split_key(key))
            .filter(|(prefix, _)| *prefix == space.as_str())
            .map(|(_, n)| n)
            .max()
            .unwrap_or(0);
        let issued = self.issued.get(space.as_str()).copied().unwrap_or(0);
        stored
            .max(issued)
            .checked_add(1)
            .ok_or_else(|| TiraError::SpaceExhausted {
                space: space.as_str().to_string(),
            })
    }

    /// Resolve a fully qualified key, or a bare id qualified with
    /// `default_space`.
    ///
    /// # Errors
    ///
    /// Returns `KeyRequired` for blank input and `IssueNotFound` if neither
    /// form exists.
    pub fn find(&self, input: &str, default_space: &Space) -> Result<&Issue> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TiraError::KeyRequired);
        }

        if let Some(issue) = self.issues.get(input) {
            return Ok(issue);
        }

        self.issues
            .get(&default_space.qualify(input))
            .ok_or_else(|| TiraError::not_found(input))
    }

    /// Get a single issue by exact key.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the key doesn't exist.
    pub fn get(&self, key: &str) -> Result<&Issue> {
        self.issues.get(key).ok_or_else(|| TiraError::not_found(key))
    }

    /// Remove an issue and return it.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the key doesn't exist.
    pub fn delete(&mut self, key: &str) -> Result<Issue> {
        let issue = self
            .issues
            .remove(key)
            .ok_or_else(|| TiraError::not_found(key))?;
        self.order.retain(|k| k != key);
        tracing::debug!(key, "deleted issue");
        Ok(issue)
    }

    /// Replace an issue's description.
    ///
    /// An empty `description` keeps the current one. Returns whether the
    /// stored description changed.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the key doesn't exist.
    pub fn update_description(&mut self, key: &str, description: &str) -> Result<bool> {
        let issue = self
            .issues
            .get_mut(key)
            .ok_or_else(|| TiraError::not_found(key))?;

        if description.is_empty() || issue.description == description {
            return Ok(false);
        }
        description.clone_into(&mut issue.description);
        tracing::debug!(key, "updated description");
        Ok(true)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All issues in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> + '_ {
        self.order.iter().filter_map(|key| self.issues.get(key))
    }

    /// Issues in `space` whose line, as produced by `render`, contains
    /// `text` (case-insensitive; empty `text` matches all).
    pub fn list<'a, F>(
        &'a self,
        space: &'a Space,
        text: &'a str,
        render: F,
    ) -> impl Iterator<Item = &'a Issue> + 'a
    where
        F: Fn(&Issue) -> String + 'a,
    {
        self.iter()
            .filter(move |issue| space.contains_key(&issue.key))
            .filter(move |issue| line_matches(&render(issue), text))
    }

    /// Issues in any space whose rendered line contains `text`.
    pub fn search_all<'a, F>(&'a self, text: &'a str, render: F) -> impl Iterator<Item = &'a Issue> + 'a
    where
        F: Fn(&Issue) -> String + 'a,
    {
        self.iter()
            .filter(move |issue| line_matches(&render(issue), text))
    }

    /// Distinct space prefixes, sorted, restricted to keys containing
    /// `text` (case-insensitive) when it is non-empty.
    #[must_use]
    pub fn distinct_spaces(&self, text: &str) -> BTreeSet<String> {
        let needle = text.to_lowercase();
        self.issues
            .values()
            .filter(|issue| needle.is_empty() || issue.key.to_lowercase().contains(&needle))
            .map(|issue| issue.space().to_string())
            .collect()
    }

    /// Number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Case-insensitive substring test; an empty needle matches everything.
fn line_matches(line: &str, needle: &str) -> bool {
    needle.is_empty() || line.to_lowercase().contains(&needle.to_lowercase())
}
