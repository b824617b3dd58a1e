//! # DB Profile MySQL
//!
//! sqlx adapter for resolved profiles. Converts a profile's connection block
//! into `MySqlConnectOptions` and offers a one-shot connectivity check.
//! No pool is kept and no migrations are run.

use std::time::Duration;

use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};

use dbprofile_types::{
    ConnectionField, ConnectionSettings, DeploymentMode, EnvironmentProfile, ProfileError,
};

/// Fields the check needs before it will dial. An empty password is valid.
const REQUIRED_FIELDS: [ConnectionField; 3] = [
    ConnectionField::Host,
    ConnectionField::User,
    ConnectionField::Database,
];

/// How long the check waits for connect + ping.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds connect options from resolved settings.
///
/// Only resolved fields are applied; sqlx defaults (`localhost:3306`, user
/// `root`, no database) stand in for the rest.
pub fn connect_options(settings: &ConnectionSettings) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new();
    if let Some(host) = &settings.host {
        options = options.host(host);
    }
    if let Some(user) = &settings.user {
        options = options.username(user);
    }
    if let Some(password) = &settings.password {
        options = options.password(password);
    }
    if let Some(database) = &settings.database {
        options = options.database(database);
    }
    options
}

fn ensure_dialable(
    mode: DeploymentMode,
    settings: &ConnectionSettings,
) -> Result<(), ProfileError> {
    let missing: Vec<ConnectionField> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| settings.get(*field).is_none_or(str::is_empty))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProfileError::Incomplete { mode, missing })
    }
}

/// Connects once with the profile's settings, pings, and disconnects.
pub async fn check_connection(
    mode: DeploymentMode,
    profile: &EnvironmentProfile,
) -> Result<(), ProfileError> {
    ensure_dialable(mode, &profile.connection)?;

    let options = connect_options(&profile.connection);
    tracing::info!(
        %mode,
        host = options.get_host(),
        database = options.get_database().unwrap_or_default(),
        "checking database connection"
    );

    let attempt = async {
        let mut conn = MySqlConnection::connect_with(&options).await?;
        conn.ping().await?;
        conn.close().await
    };

    match tokio::time::timeout(CHECK_TIMEOUT, attempt).await {
        Ok(Ok(())) => {
            tracing::info!(%mode, "database connection ok");
            Ok(())
        }
        Ok(Err(e)) => Err(ProfileError::Connection(e.to_string())),
        Err(_) => Err(ProfileError::Connection(format!(
            "timed out after {}s",
            CHECK_TIMEOUT.as_secs()
        ))),
    }
}
