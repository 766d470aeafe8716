//! Roster location: flag, then environment, then the user config dir.

use std::path::PathBuf;

use crate::error::{RbError, Result};

pub const ROSTER_ENV: &str = "RB_ROSTER";

const ROSTER_FILE: &str = "people.csv";

/// Resolve where the roster lives. An explicit `--roster` path wins,
/// then `RB_ROSTER`, then `<user config dir>/rb/people.csv`.
pub fn roster_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    if let Ok(path) = std::env::var(ROSTER_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    directories::ProjectDirs::from("", "", "rb")
        .map(|dirs| dirs.config_dir().join(ROSTER_FILE))
        .ok_or(RbError::NoConfigDir)
}
