//! Connection settings resolved from the environment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four values needed to reach a MySQL server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionField {
    Host,
    User,
    Password,
    Database,
}

impl ConnectionField {
    /// All fields, in output order.
    pub const ALL: [ConnectionField; 4] = [
        ConnectionField::Host,
        ConnectionField::User,
        ConnectionField::Password,
        ConnectionField::Database,
    ];

    /// Returns the key used for this field in the connection block.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionField::Host => "host",
            ConnectionField::User => "user",
            ConnectionField::Password => "password",
            ConnectionField::Database => "database",
        }
    }
}

impl fmt::Display for ConnectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host, user, password and database for the `mysql2` client.
///
/// Every field is optional. An unresolved value stays `None` and is left
/// out of the serialized block entirely, so the consuming tool sees the key
/// as missing and reports the connection failure itself.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl ConnectionSettings {
    /// Returns the value of a single field.
    pub fn get(&self, field: ConnectionField) -> Option<&str> {
        match field {
            ConnectionField::Host => self.host.as_deref(),
            ConnectionField::User => self.user.as_deref(),
            ConnectionField::Password => self.password.as_deref(),
            ConnectionField::Database => self.database.as_deref(),
        }
    }

    /// Sets a single field, returning the previous value.
    pub fn set(&mut self, field: ConnectionField, value: Option<String>) -> Option<String> {
        let slot = match field {
            ConnectionField::Host => &mut self.host,
            ConnectionField::User => &mut self.user,
            ConnectionField::Password => &mut self.password,
            ConnectionField::Database => &mut self.database,
        };
        std::mem::replace(slot, value)
    }

    /// Fields that did not resolve to any value.
    pub fn missing_fields(&self) -> Vec<ConnectionField> {
        ConnectionField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// True when all four fields resolved.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

// Keeps the password out of logs.
impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .finish()
    }
}
