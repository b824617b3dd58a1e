//! Profile Assembly Service
//!
//! Builds the `development`/`production` profile set from an environment
//! source. Contains NO environment access of its own - everything goes
//! through the injected `EnvSource`.

use dbprofile_env::{ProcessEnv, resolve_connection, resolve_var};
use dbprofile_types::{
    ConnectionSettings, DeploymentMode, EnvSource, EnvironmentProfile, ProfileError, ProfileSet,
};

/// Variables selecting the active mode: primary, then legacy.
pub const MODE_VARS: (&str, &str) = ("APP_ENV", "NODE_ENV");

/// Builds the profile set from already-resolved connection settings.
///
/// Both modes receive the same connection block.
pub fn assemble_profiles(connection: ConnectionSettings) -> ProfileSet {
    let development = EnvironmentProfile::new(connection.clone());
    let production = EnvironmentProfile::new(connection);
    ProfileSet::new(development, production)
}

/// Application service for profile loading.
///
/// Construct once at startup and hand the resulting `ProfileSet` to
/// consumers instead of reading the environment from several places.
pub struct ProfileService<E: EnvSource> {
    env: E,
}

impl ProfileService<ProcessEnv> {
    /// Service reading the process environment.
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: EnvSource> ProfileService<E> {
    /// Creates a new service with the given environment source.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Returns a reference to the underlying environment source.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Resolves the connection settings shared by every profile.
    pub fn connection(&self) -> ConnectionSettings {
        resolve_connection(&self.env)
    }

    /// Assembles the full profile set.
    pub fn assemble(&self) -> ProfileSet {
        let connection = self.connection();
        let missing = connection.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "assembling profiles with unresolved connection fields");
        }
        assemble_profiles(connection)
    }

    /// Assembles the profile for one mode.
    pub fn profile(&self, mode: DeploymentMode) -> EnvironmentProfile {
        self.assemble().get(mode).clone()
    }

    /// Mode named by `APP_ENV` (or legacy `NODE_ENV`), `development` when neither is set.
    pub fn active_mode(&self) -> Result<DeploymentMode, ProfileError> {
        let (primary, fallback) = MODE_VARS;
        match resolve_var(&self.env, primary, fallback) {
            Some(name) if !name.is_empty() => name.parse().inspect_err(|_| {
                tracing::warn!(mode = %name, "unknown deployment mode in environment");
            }),
            _ => Ok(DeploymentMode::default()),
        }
    }
}
