//! Environment profiles and the two-mode profile set.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ConnectionSettings, DeploymentMode};

/// Table the migration tool records applied migrations in.
pub const MIGRATIONS_TABLE: &str = "migrations";
/// Directory holding migration files, relative to the project root.
pub const MIGRATIONS_DIRECTORY: &str = "./database/migrations";
/// Directory holding seed files, relative to the project root.
pub const SEEDS_DIRECTORY: &str = "./database/seeds";

/// Database client driver the profile is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Client {
    #[default]
    #[serde(rename = "mysql2")]
    Mysql2,
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Client::Mysql2 => f.write_str("mysql2"),
        }
    }
}

/// Where migrations live and which table tracks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationSettings {
    pub table_name: String,
    pub directory: String,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            table_name: MIGRATIONS_TABLE.to_string(),
            directory: MIGRATIONS_DIRECTORY.to_string(),
        }
    }
}

/// Where seed files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSettings {
    pub directory: String,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            directory: SEEDS_DIRECTORY.to_string(),
        }
    }
}

/// Connection settings plus the migration tool's conventions for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    pub client: Client,
    pub connection: ConnectionSettings,
    pub migrations: MigrationSettings,
    pub seeds: SeedSettings,
}

impl EnvironmentProfile {
    /// Creates a `mysql2` profile with the default directory layout.
    pub fn new(connection: ConnectionSettings) -> Self {
        Self {
            client: Client::Mysql2,
            connection,
            migrations: MigrationSettings::default(),
            seeds: SeedSettings::default(),
        }
    }
}

/// Profiles keyed by deployment mode.
///
/// Always carries exactly `development` and `production`. Fields are private
/// so the set stays read-only once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSet {
    development: EnvironmentProfile,
    production: EnvironmentProfile,
}

impl ProfileSet {
    pub fn new(development: EnvironmentProfile, production: EnvironmentProfile) -> Self {
        Self {
            development,
            production,
        }
    }

    /// Returns the profile for a mode.
    pub fn get(&self, mode: DeploymentMode) -> &EnvironmentProfile {
        match mode {
            DeploymentMode::Development => &self.development,
            DeploymentMode::Production => &self.production,
        }
    }

    pub fn development(&self) -> &EnvironmentProfile {
        &self.development
    }

    pub fn production(&self) -> &EnvironmentProfile {
        &self.production
    }

    /// Iterates `(mode, profile)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (DeploymentMode, &EnvironmentProfile)> {
        DeploymentMode::ALL
            .into_iter()
            .map(move |mode| (mode, self.get(mode)))
    }
}
