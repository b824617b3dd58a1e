//! Environment port trait.
//!
//! Adapters (process environment, in-memory map, `.env` file) implement this.

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` when it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for Box<T> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
