use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {var} is not set")]
    Missing { var: String },

    #[error("environment variable {var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Name of the environment variable that caused the error
    pub fn var(&self) -> &str {
        match self {
            ConfigError::Missing { var } | ConfigError::Invalid { var, .. } => var,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_variable() {
        let err = ConfigError::Missing {
            var: "INFLUXDB_DATABASE".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required environment variable INFLUXDB_DATABASE is not set"
        );
        assert_eq!(err.var(), "INFLUXDB_DATABASE");
    }

    #[test]
    fn invalid_message_quotes_the_value() {
        let err = ConfigError::Invalid {
            var: "INFLUXDB_PORT".to_string(),
            value: "http".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "environment variable INFLUXDB_PORT has invalid value \"http\": invalid digit found in string"
        );
    }
}
