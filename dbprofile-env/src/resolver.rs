//! Primary/legacy variable resolution.
//!
//! Each connection field is read from a primary `DB_*` variable and, when that
//! is unset or empty, from the legacy `MYSQL_*` name it replaced.

use dbprofile_types::{ConnectionField, ConnectionSettings, EnvSource};

/// Primary and legacy variable names for one connection field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackVars {
    pub field: ConnectionField,
    pub primary: &'static str,
    pub fallback: &'static str,
}

/// Variable names for every connection field, in output order.
pub const FALLBACK_VARS: [FallbackVars; 4] = [
    FallbackVars {
        field: ConnectionField::Host,
        primary: "DB_HOST",
        fallback: "MYSQL_HOST",
    },
    FallbackVars {
        field: ConnectionField::User,
        primary: "DB_USER",
        fallback: "MYSQL_USER",
    },
    FallbackVars {
        field: ConnectionField::Password,
        primary: "DB_PASSWORD",
        fallback: "MYSQL_PASSWORD",
    },
    FallbackVars {
        field: ConnectionField::Database,
        primary: "DB_NAME",
        fallback: "MYSQL_DATABASE_NAME",
    },
];

/// Returns the variable names consulted for `field`.
pub fn vars_for(field: ConnectionField) -> FallbackVars {
    match field {
        ConnectionField::Host => FALLBACK_VARS[0],
        ConnectionField::User => FALLBACK_VARS[1],
        ConnectionField::Password => FALLBACK_VARS[2],
        ConnectionField::Database => FALLBACK_VARS[3],
    }
}

/// Which variable supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Primary(&'static str),
    Fallback(&'static str),
    Unset,
}

/// A resolved field value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub field: ConnectionField,
    pub value: Option<String>,
    pub source: Source,
}

fn resolve_with_source(
    env: &impl EnvSource,
    primary: &'static str,
    fallback: &'static str,
) -> (Option<String>, Source) {
    // An empty primary is treated like an unset one.
    if let Some(value) = env.var(primary).filter(|v| !v.is_empty()) {
        return (Some(value), Source::Primary(primary));
    }

    match env.var(fallback) {
        Some(value) => (Some(value), Source::Fallback(fallback)),
        None => (None, Source::Unset),
    }
}

/// Resolves `primary`, falling back to `fallback`.
///
/// The fallback's value is returned as-is, including an empty string.
pub fn resolve_var(env: &impl EnvSource, primary: &str, fallback: &str) -> Option<String> {
    match env.var(primary) {
        Some(value) if !value.is_empty() => Some(value),
        _ => env.var(fallback),
    }
}

/// Resolves one connection field and records its source.
pub fn resolve_field(env: &impl EnvSource, field: ConnectionField) -> Resolved {
    let vars = vars_for(field);
    let (value, source) = resolve_with_source(env, vars.primary, vars.fallback);

    match source {
        Source::Primary(name) | Source::Fallback(name) => {
            tracing::debug!(field = %field, var = name, "resolved connection field");
        }
        Source::Unset => {
            tracing::debug!(
                field = %field,
                primary = vars.primary,
                fallback = vars.fallback,
                "connection field unset"
            );
        }
    }

    Resolved {
        field,
        value,
        source,
    }
}

/// Resolves all four connection fields.
pub fn resolve_connection(env: &impl EnvSource) -> ConnectionSettings {
    let mut settings = ConnectionSettings::default();
    for field in ConnectionField::ALL {
        let resolved = resolve_field(env, field);
        settings.set(field, resolved.value);
    }
    settings
}
