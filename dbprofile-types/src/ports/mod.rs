//! Port traits (interfaces for adapters).
//!
//! The assembler depends on these traits, not on `std::env` directly.

mod env;

pub use env::EnvSource;
