//! In-memory environment adapter.

use std::collections::HashMap;
use std::path::Path;

use dbprofile_types::{EnvSource, ProfileError};

/// Variables held in a map instead of the process environment.
///
/// Used by tests and for reading an explicit `.env` file without mutating
/// the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(key, value)` pairs. Later pairs overwrite earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parses a `.env` file into a map.
    ///
    /// Variables are not exported to the process.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let file_error =
            |e: dotenvy::Error| ProfileError::EnvFile(format!("{}: {}", path.display(), e));

        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(file_error)? {
            let (key, value) = item.map_err(file_error)?;
            vars.insert(key, value);
        }

        tracing::debug!(path = %path.display(), count = vars.len(), "parsed env file");
        Ok(Self { vars })
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Two sources stacked: `top` is consulted first, `base` when `top` has no value.
#[derive(Debug, Clone)]
pub struct Layered<T, B> {
    top: T,
    base: B,
}

impl<T: EnvSource, B: EnvSource> Layered<T, B> {
    pub fn new(top: T, base: B) -> Self {
        Self { top, base }
    }
}

impl<T: EnvSource, B: EnvSource> EnvSource for Layered<T, B> {
    fn var(&self, key: &str) -> Option<String> {
        self.top.var(key).or_else(|| self.base.var(key))
    }
}
