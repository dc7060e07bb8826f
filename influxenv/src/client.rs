use crate::env::{EnvSource, SystemEnv};
use crate::{ConfigError, InfluxConfig, DEFAULT_PREFIX};
use influxdb2::Client;
use tracing::info;

/// Create a new InfluxDB client for the given configuration.
///
/// The client is built with an empty organization, which the 1.x
/// compatibility endpoints ignore. Reachability is not checked.
///
/// # Panics
///
/// Panics if `config.url()` is not a valid URL. Configurations from the
/// loaders are always valid; this can only happen for hand-built ones.
pub fn new_client(config: &InfluxConfig) -> Client {
    let url = config.url();
    info!(
        "Creating InfluxDB client for {} (database {}, authenticated: {})",
        url,
        config.database,
        config.has_credentials()
    );

    Client::new(url, "", config.auth_token())
}

/// Load the configuration for `prefix` and build a client from it
pub fn try_new_client_from_env(prefix: &str) -> Result<(Client, InfluxConfig), ConfigError> {
    try_new_client_from_source(&SystemEnv, prefix)
}

/// Load the configuration from `source` and build a client from it
pub fn try_new_client_from_source<S: EnvSource + ?Sized>(
    source: &S,
    prefix: &str,
) -> Result<(Client, InfluxConfig), ConfigError> {
    let config = InfluxConfig::from_source(source, prefix)?;
    Ok((new_client(&config), config))
}

/// Load the configuration for `prefix` and build a client from it.
///
/// Fail-fast variant of [`try_new_client_from_env`] for programs that
/// cannot run without a database.
///
/// # Panics
///
/// Panics if the configuration cannot be loaded, e.g. when
/// `<prefix>_DATABASE` is not set.
pub fn new_client_from_env(prefix: &str) -> (Client, InfluxConfig) {
    new_client_from_source(&SystemEnv, prefix)
}

/// Same as [`new_client_from_env`] with the `INFLUXDB` prefix.
///
/// # Panics
///
/// Panics if the configuration cannot be loaded.
pub fn new_default_client() -> (Client, InfluxConfig) {
    new_client_from_env(DEFAULT_PREFIX)
}

/// Fail-fast variant of [`try_new_client_from_source`].
///
/// # Panics
///
/// Panics if the configuration cannot be loaded from `source`.
pub fn new_client_from_source<S: EnvSource + ?Sized>(source: &S, prefix: &str) -> (Client, InfluxConfig) {
    match try_new_client_from_source(source, prefix) {
        Ok(pair) => pair,
        Err(e) => panic!("Failed to load InfluxDB configuration: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn builds_client_and_returns_loaded_config() {
        let vars = env(&[
            ("INFLUXDB_DATABASE", "metrics"),
            ("INFLUXDB_USERNAME", "bob"),
            ("INFLUXDB_PASSWORD", "secret"),
            ("INFLUXDB_PORT", "9999"),
        ]);

        let (_client, config) = try_new_client_from_source(&vars, DEFAULT_PREFIX).unwrap();

        assert_eq!(config.url(), "http://127.0.0.1:9999");
        assert_eq!(config.auth_token(), "bob:secret");
    }

    #[test]
    fn fallible_path_returns_error_without_database() {
        let err = try_new_client_from_source(&env(&[]), DEFAULT_PREFIX).err().unwrap();

        assert_eq!(err.var(), "INFLUXDB_DATABASE");
    }

    #[test]
    #[should_panic(expected = "INFLUXDB_DATABASE")]
    fn fail_fast_path_panics_without_database() {
        new_client_from_source(&env(&[]), DEFAULT_PREFIX);
    }

    #[rstest]
    #[case("INFLUXDB_HOST", "bad host")]
    #[case("INFLUXDB_SCHEME", "ht tp")]
    fn malformed_endpoint_is_an_error_not_a_panic(#[case] var: &str, #[case] value: &str) {
        let vars = env(&[("INFLUXDB_DATABASE", "metrics"), (var, value)]);

        let err = try_new_client_from_source(&vars, DEFAULT_PREFIX).err().unwrap();

        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert_eq!(err.var(), var);
    }

    #[test]
    fn unauthenticated_config_still_builds_client() {
        let (_client, config) = new_client_from_source(&env(&[("INFLUXDB_DATABASE", "metrics")]), DEFAULT_PREFIX);

        assert_eq!(config.auth_token(), "");
    }
}
