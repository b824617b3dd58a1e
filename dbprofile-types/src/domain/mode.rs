//! Deployment modes a profile is keyed by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;

/// Named deployment context selecting one profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    #[default]
    Development,
    Production,
}

impl DeploymentMode {
    /// Both modes, in output order.
    pub const ALL: [DeploymentMode; 2] =
        [DeploymentMode::Development, DeploymentMode::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentMode::Development => "development",
            DeploymentMode::Production => "production",
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact lowercase name; the migration tool looks profiles up by key.
impl FromStr for DeploymentMode {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(DeploymentMode::Development),
            "production" => Ok(DeploymentMode::Production),
            _ => Err(ProfileError::UnknownMode(s.to_string())),
        }
    }
}
