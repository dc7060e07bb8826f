//! Sources of environment variables.
//!
//! Loading goes through [`EnvSource`] instead of touching `std::env`
//! directly, so tests and embedders can hand in a synthetic environment.

use std::collections::{BTreeMap, HashMap};

/// Key-value lookup the configuration loader reads from.
pub trait EnvSource: Send + Sync {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Box<S> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Builds the variable name for `field` under `prefix`.
///
/// The whole name is upper-cased, and an empty prefix yields the bare field
/// name: `env_key("influxdb", "port") == "INFLUXDB_PORT"`,
/// `env_key("", "port") == "PORT"`.
pub fn env_key(prefix: &str, field: &str) -> String {
    let key = if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}_{}", prefix, field)
    };
    key.to_uppercase()
}
