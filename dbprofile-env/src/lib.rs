//! # DB Profile Env
//!
//! Environment adapters implementing the `EnvSource` port, plus the
//! primary/legacy fallback resolver that turns them into connection settings.
//!
//! - `process` - the real process environment and `.env` loading
//! - `map` - in-memory variables, optionally read from a `.env` file, and layering
//! - `resolver` - `DB_*` first, `MYSQL_*` second

pub mod map;
pub mod process;
pub mod resolver;

pub use map::{Layered, MapEnv};
pub use process::{ProcessEnv, load_dotenv};
pub use resolver::{
    FALLBACK_VARS, FallbackVars, Resolved, Source, resolve_connection, resolve_field, resolve_var,
    vars_for,
};
