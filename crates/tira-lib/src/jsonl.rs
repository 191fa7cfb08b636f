//! JSONL file I/O for tira issues.
//!
//! Each line in the file is one complete `Issue`. The file is always a
//! full snapshot: every save rewrites it from scratch.

use std::ffi::OsString;
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TiraError};
use crate::model::Issue;

/// Load issues from a JSONL file, in file order.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, or `JsonlParse` if any line is invalid.
pub fn load(path: &Path) -> Result<Vec<Issue>> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut issues = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let issue: Issue = serde_json::from_str(trimmed).map_err(|e| TiraError::JsonlParse {
            line: line_num + 1,
            reason: e.to_string(),
        })?;
        issues.push(issue);
    }

    Ok(issues)
}

/// Save issues to a JSONL file with atomic write.
///
/// Creates missing parent directories, writes to a sibling temp file and
/// renames it over `path`.
///
/// # Errors
///
/// Returns `CreateDir` if the parent directory cannot be created, or `Io`
/// if the file cannot be written.
pub fn save<'a>(path: &Path, issues: impl IntoIterator<Item = &'a Issue>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| TiraError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = temp_path(path);
    let mut writer = BufWriter::new(fs::File::create(&tmp_path)?);
    for issue in issues {
        let json = serde_json::to_string(issue)?;
        writeln!(writer, "{json}")?;
    }
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("tira_data"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}
