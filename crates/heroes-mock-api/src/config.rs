//! Configuration for the mock hero API binary.
//!
//! All configuration is loaded from environment variables.

use crate::server::{ServerConfig, ServerError};

/// Complete mock API configuration loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockApiConfig {
    /// Where the server listens.
    pub server: ServerConfig,
    /// Whether the store starts with the default roster.
    pub seed: bool,
    /// Whether every request is kept in the in-memory request log.
    pub record_requests: bool,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            seed: true,
            record_requests: false,
        }
    }
}

impl MockApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `HEROES_HOST` -- bind address (default `0.0.0.0`)
    /// - `HEROES_PORT` -- TCP port (default `8080`)
    /// - `HEROES_SEED` -- start with the default roster (default `true`)
    /// - `HEROES_RECORD_REQUESTS` -- keep a log of every request (default `false`)
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let host = lookup("HEROES_HOST").unwrap_or_else(|| "0.0.0.0".to_owned());

        let port: u16 = lookup("HEROES_PORT")
            .unwrap_or_else(|| "8080".to_owned())
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid HEROES_PORT: {e}")))?;

        let seed: bool = lookup("HEROES_SEED")
            .unwrap_or_else(|| "true".to_owned())
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid HEROES_SEED: {e}")))?;

        let record_requests: bool = lookup("HEROES_RECORD_REQUESTS")
            .unwrap_or_else(|| "false".to_owned())
            .parse()
            .map_err(|e| {
                ServerError::Config(format!("invalid HEROES_RECORD_REQUESTS: {e}"))
            })?;

        Ok(Self {
            server: ServerConfig { host, port },
            seed,
            record_requests,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = MockApiConfig::from_lookup(|_| None).ok();
        assert_eq!(config, Some(MockApiConfig::default()));
    }

    #[test]
    fn reads_overrides() {
        let config = MockApiConfig::from_lookup(|name| match name {
            "HEROES_HOST" => Some("127.0.0.1".to_owned()),
            "HEROES_PORT" => Some("9000".to_owned()),
            "HEROES_SEED" => Some("false".to_owned()),
            "HEROES_RECORD_REQUESTS" => Some("true".to_owned()),
            _ => None,
        })
        .ok();

        let expected = MockApiConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_owned(),
                port: 9000,
            },
            seed: false,
            record_requests: true,
        };
        assert_eq!(config, Some(expected));
    }

    #[test]
    fn rejects_bad_port() {
        let result = MockApiConfig::from_lookup(|name| {
            (name == "HEROES_PORT").then(|| "eighty".to_owned())
        });
        assert!(matches!(result, Err(ServerError::Config(_))));
    }
}
