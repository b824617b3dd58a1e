//! Domain models for database profiles.

pub mod connection;
pub mod mode;
pub mod profile;

pub use connection::{ConnectionField, ConnectionSettings};
pub use mode::DeploymentMode;
pub use profile::{Client, EnvironmentProfile, MigrationSettings, ProfileSet, SeedSettings};
