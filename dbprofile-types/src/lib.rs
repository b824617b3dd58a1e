//! # DB Profile Types
//!
//! Domain types and port traits for database profile resolution.
//! This crate has ZERO IO dependencies - only data structures and the
//! trait that environment adapters implement.
//!
//! ## Architecture
//!
//! - `domain/` - Connection settings, profiles and deployment modes
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Error types raised at the edges (CLI, connection check)

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Client, ConnectionField, ConnectionSettings, DeploymentMode, EnvironmentProfile,
    MigrationSettings, ProfileSet, SeedSettings,
};
pub use error::ProfileError;
pub use ports::EnvSource;
