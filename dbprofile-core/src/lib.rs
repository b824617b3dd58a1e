//! # DB Profile Core
//!
//! Application service that assembles the per-mode profile set.
//!
//! The service is generic over `E: EnvSource`, so the process environment,
//! a parsed `.env` file or an in-memory map can be injected.

pub mod service;


pub use service::{MODE_VARS, ProfileService, assemble_profiles};
