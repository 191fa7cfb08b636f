//! Configuration management for `tira`.
//!
//! The data file location is resolved in this order:
//! - `--data-file` / `TIRA_DATA_FILE`
//! - `data_file` in the user config (`<app dir>/config.yaml`)
//! - `<app dir>/tira_data.jsonl`
//!
//! The app dir is `%APPDATA%\tira` on Windows,
//! `~/Library/Application Support/tira` on macOS and `~/.local/tira`
//! elsewhere.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tira_lib::Space;

use crate::error::{Result, TiraError};

/// Per-user directory name.
pub const APP_DIR: &str = "tira";
/// Default data file name inside the app dir.
pub const DATA_FILE_NAME: &str = "tira_data.jsonl";
/// Config file name inside the app dir.
pub const CONFIG_FILE_NAME: &str = "config.yaml";
/// Environment fallback for `--data-file`.
pub const DATA_FILE_ENV: &str = "TIRA_DATA_FILE";

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
}

/// Contents of `config.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Data file path; relative paths are taken from the app dir.
    pub data_file: Option<PathBuf>,
    /// Space a new session starts in.
    pub default_space: Option<String>,
}

/// Fully resolved startup settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: PathBuf,
    pub default_space: Space,
}

/// Platform default app directory.
#[cfg(any(windows, target_os = "macos"))]
#[must_use]
pub fn default_app_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

/// Platform default app directory.
#[cfg(not(any(windows, target_os = "macos")))]
#[must_use]
pub fn default_app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".local").join(APP_DIR))
}

/// Read `config.yaml`; a missing file yields the defaults.
///
/// # Errors
///
/// Returns `Config` if the file exists but cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ConfigFile::default()),
        Err(e) => {
            return Err(TiraError::Config(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(&contents)
        .map_err(|e| TiraError::Config(format!("invalid {}: {e}", path.display())))
}

/// Resolve settings against the platform app dir.
///
/// # Errors
///
/// Returns `Config` if the config file is invalid or no data file location
/// can be determined.
pub fn resolve(cli: &CliOverrides) -> Result<Settings> {
    resolve_in(default_app_dir().as_deref(), cli)
}

/// Resolve settings against an explicit app dir.
///
/// # Errors
///
/// Returns `Config` if the config file is invalid, `default_space` is not a
/// valid space, or there is neither an override nor an app dir.
pub fn resolve_in(app_dir: Option<&Path>, cli: &CliOverrides) -> Result<Settings> {
    let file = match app_dir {
        Some(dir) => load_config_file(&dir.join(CONFIG_FILE_NAME))?,
        None => ConfigFile::default(),
    };

    let default_space = match file.default_space.as_deref() {
        Some(name) => name.parse().map_err(|_| {
            TiraError::Config(format!(
                "default_space must be two or three capital letters, got {name:?}"
            ))
        })?,
        None => Space::default(),
    };

    let data_file = match (&cli.data_file, &file.data_file, app_dir) {
        (Some(path), _, _) => path.clone(),
        (None, Some(path), Some(dir)) if path.is_relative() => dir.join(path),
        (None, Some(path), _) => path.clone(),
        (None, None, Some(dir)) => dir.join(DATA_FILE_NAME),
        (None, None, None) => {
            return Err(TiraError::Config(
                "cannot determine a per-user data directory; pass --data-file".to_string(),
            ));
        }
    };

    tracing::debug!(
        data_file = %dunce::simplified(&data_file).display(),
        default_space = %default_space,
        "resolved settings"
    );

    Ok(Settings {
        data_file,
        default_space,
    })
}
