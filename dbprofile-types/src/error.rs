//! Error types for profile loading.
//!
//! Resolving variables never fails; these only surface at the edges.

use crate::domain::{ConnectionField, DeploymentMode};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Unknown deployment mode: {0} (expected development or production)")]
    UnknownMode(String),

    #[error("Env file error: {0}")]
    EnvFile(String),

    #[error("Incomplete connection settings for {mode}: missing {}", join_fields(.missing))]
    Incomplete {
        mode: DeploymentMode,
        missing: Vec<ConnectionField>,
    },

    #[error("Connection error: {0}")]
    Connection(String),
}

fn join_fields(fields: &[ConnectionField]) -> String {
    fields
        .iter()
        .map(ConnectionField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
