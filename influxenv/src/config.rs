use crate::env::{env_key, EnvSource, SystemEnv};
use crate::ConfigError;
use serde::Serialize;
use std::fmt;
use tracing::debug;
use url::Url;

/// Prefix used by the zero-argument loaders
pub const DEFAULT_PREFIX: &str = "INFLUXDB";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8086;
pub const DEFAULT_SCHEME: &str = "http";

/// Configuration for connecting to an InfluxDB server
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct InfluxConfig {
    /// Database to use, always non-empty once loaded
    pub database: String,
    /// Username, empty when connecting unauthenticated
    pub username: String,
    /// Password, empty when connecting unauthenticated
    #[serde(skip_serializing)]
    pub password: String,
    pub host: String,
    pub port: u16,
    /// URL scheme, usually `http` or `https`
    pub scheme: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

impl fmt::Debug for InfluxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "***" };
        f.debug_struct("InfluxConfig")
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &password)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("scheme", &self.scheme)
            .finish()
    }
}

impl InfluxConfig {
    /// Create a configuration from the `<prefix>_*` environment variables.
    ///
    /// `prefix` is given without the trailing underscore: `INFLUXDB` reads
    /// `INFLUXDB_DATABASE`, `INFLUXDB_USERNAME`, `INFLUXDB_PASSWORD`,
    /// `INFLUXDB_HOST`, `INFLUXDB_PORT` and `INFLUXDB_SCHEME`.
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_source(&SystemEnv, prefix)
    }

    /// Same as [`InfluxConfig::from_env`] with the `INFLUXDB` prefix
    pub fn from_default_env() -> Result<Self, ConfigError> {
        Self::from_env(DEFAULT_PREFIX)
    }

    /// Create a configuration from an arbitrary environment source
    pub fn from_source<S: EnvSource + ?Sized>(source: &S, prefix: &str) -> Result<Self, ConfigError> {
        let lookup = |field: &str| {
            let key = env_key(prefix, field);
            let value = source.var(&key).filter(|v| !v.is_empty());
            (key, value)
        };

        let database = match lookup("DATABASE") {
            (_, Some(database)) => database,
            (var, None) => return Err(ConfigError::Missing { var }),
        };
        let username = lookup("USERNAME").1.unwrap_or_default();
        let password = lookup("PASSWORD").1.unwrap_or_default();
        let (host_var, host) = lookup("HOST");
        let host = host.unwrap_or_else(default_host);
        let port = match lookup("PORT") {
            (var, Some(value)) => parse_port(var, value)?,
            (_, None) => DEFAULT_PORT,
        };
        let (scheme_var, scheme) = lookup("SCHEME");
        let scheme = scheme.unwrap_or_else(default_scheme);

        // The client parses the URL itself and panics on failure
        validate_scheme(scheme_var, &scheme)?;
        validate_url(host_var, &host, &format!("{}://{}:{}", scheme, host, port))?;

        let config = Self {
            database,
            username,
            password,
            host,
            port,
            scheme,
        };
        debug!("Loaded InfluxDB configuration for prefix {:?}: {:?}", prefix, config);

        Ok(config)
    }

    /// Server URL in the form `<scheme>://<host>:<port>`
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    /// Credential string passed to the client.
    ///
    /// `<username>:<password>` when both are set, otherwise empty, which
    /// leaves the connection unauthenticated.
    pub fn auth_token(&self) -> String {
        if self.has_credentials() {
            format!("{}:{}", self.username, self.password)
        } else {
            String::new()
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

fn validate_scheme(var: String, scheme: &str) -> Result<(), ConfigError> {
    match Url::parse(&format!("{}://localhost", scheme)) {
        Ok(url) if url.scheme().eq_ignore_ascii_case(scheme) => Ok(()),
        Ok(_) => Err(ConfigError::Invalid {
            var,
            value: scheme.to_string(),
            reason: "not a valid URL scheme".to_string(),
        }),
        Err(e) => Err(ConfigError::Invalid {
            var,
            value: scheme.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn validate_url(var: String, host: &str, url: &str) -> Result<(), ConfigError> {
    Url::parse(url).map(|_| ()).map_err(|e| ConfigError::Invalid {
        var,
        value: host.to_string(),
        reason: e.to_string(),
    })
}

fn parse_port(var: String, value: String) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}
