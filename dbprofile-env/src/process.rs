//! Process environment adapter.

use std::env::{self, VarError};
use std::path::PathBuf;

use dbprofile_types::{EnvSource, ProfileError};

/// Reads variables from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(var = key, "ignoring non-unicode environment variable");
                None
            }
        }
    }
}

/// Loads `./.env` (or the nearest one in a parent directory) into the process.
///
/// Variables already set in the process are left untouched. Returns the path
/// that was loaded, or `None` when there is no `.env`. On a malformed file the
/// lines before the bad one are already loaded; the error is returned so the
/// caller can report it once logging is up.
pub fn load_dotenv() -> Result<Option<PathBuf>, ProfileError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ProfileError::EnvFile(format!(".env: {}", e))),
    }
}
