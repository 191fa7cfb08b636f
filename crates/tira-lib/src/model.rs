//! Core data types for tira.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TiraError;

static SPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2,3}$").unwrap_or_else(|e| unreachable!("space pattern: {e}"))
});

/// A namespace for issue keys: two or three uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Space(String);

impl Space {
    /// The space a fresh session starts in.
    pub const DEFAULT: &'static str = "TI";

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Qualify a bare id (`"7"`) into a key in this space (`"TI-7"`).
    #[must_use]
    pub fn qualify(&self, bare: &str) -> String {
        format!("{}-{bare}", self.0)
    }

    /// Whether `key` belongs to this space.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        key.strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with('-'))
    }

    #[must_use]
    pub fn is_valid(name: &str) -> bool {
        SPACE_RE.is_match(name)
    }
}

impl Default for Space {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Space {
    type Err = TiraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(TiraError::InvalidSpace {
                space: s.to_string(),
            })
        }
    }
}

/// Split a key into its space prefix and numeric id.
///
/// Returns `None` unless the key is `<SPACE>-<positive integer>`.
#[must_use]
pub fn split_key(key: &str) -> Option<(&str, u64)> {
    let (space, number) = key.split_once('-')?;
    if !Space::is_valid(space) || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match number.parse::<u64>() {
        Ok(n) if n > 0 => Some((space, n)),
        _ => None,
    }
}

/// A tracked unit of work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    /// Unique key (e.g., "TI-1").
    pub key: String,

    /// Free-text description; may be empty.
    #[serde(default)]
    pub description: String,

    /// Creation timestamp.
    pub created: DateTime<Utc>,
}

impl Issue {
    #[must_use]
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            created: Utc::now(),
        }
    }

    /// Space prefix of this issue's key.
    #[must_use]
    pub fn space(&self) -> &str {
        self.key.split_once('-').map_or(self.key.as_str(), |(s, _)| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_space_accepts_two_or_three_capitals() {
        assert_eq!("TI".parse::<Space>().unwrap().as_str(), "TI");
        assert_eq!("ABC".parse::<Space>().unwrap().as_str(), "ABC");
    }

    #[test]
    fn test_space_rejects_everything_else() {
        for bad in ["", "T", "ti", "Ti", "TIRA", "T1", "T-", " TI", "TI ", "ÄB"] {
            let err = bad.parse::<Space>().unwrap_err();
            assert!(matches!(err, TiraError::InvalidSpace { .. }), "{bad:?}");
        }
    }

    #[test]
    fn test_default_space() {
        assert_eq!(Space::default().to_string(), "TI");
    }

    #[test]
    fn test_qualify_and_contains_key() {
        let space: Space = "QA".parse().unwrap();
        assert_eq!(space.qualify("3"), "QA-3");
        assert!(space.contains_key("QA-3"));
        assert!(!space.contains_key("QAX-3"));
        assert!(!space.contains_key("TI-3"));
    }

    #[test]
    fn test_split_key() {
        assert_eq!(split_key("TI-1"), Some(("TI", 1)));
        assert_eq!(split_key("ABC-42"), Some(("ABC", 42)));
        assert_eq!(split_key("TI-0"), None);
        assert_eq!(split_key("TI-x"), None);
        assert_eq!(split_key("TI-+1"), None);
        assert_eq!(split_key("ti-1"), None);
        assert_eq!(split_key("TI1"), None);
        assert_eq!(split_key("TI-1-2"), None);
    }

    #[test]
    fn test_issue_space() {
        let issue = Issue::new("QA-7", "x");
        assert_eq!(issue.space(), "QA");
    }

    #[test]
    fn test_serde_shape() {
        let mut issue = Issue::new("TI-1", "Desc");
        issue.created = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let json = serde_json::to_string(&issue).unwrap();
        assert_eq!(
            json,
            r#"{"key":"TI-1","description":"Desc","created":"2026-01-02T03:04:05Z"}"#
        );
    }
}
