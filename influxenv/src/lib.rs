//! Build an InfluxDB client from `<PREFIX>_*` environment variables.
//!
//! ```no_run
//! let config = influxenv::InfluxConfig::from_default_env()?;
//! let client = influxenv::new_client(&config);
//! # Ok::<(), influxenv::ConfigError>(())
//! ```

mod client;
mod config;
mod error;
pub mod env;

pub use client::{
    new_client, new_client_from_env, new_client_from_source, new_default_client,
    try_new_client_from_env, try_new_client_from_source,
};
pub use config::{InfluxConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PREFIX, DEFAULT_SCHEME};
pub use env::{EnvSource, SystemEnv};
pub use error::ConfigError;
pub use influxdb2::Client;
