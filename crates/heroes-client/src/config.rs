//! Configuration for the hero data-access client.
//!
//! All configuration is loaded from environment variables. The client only
//! needs to know where the hero collection lives.

use crate::error::ClientError;

/// Base URL used when `HEROES_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/";

/// Complete client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the `api/heroes` resource is resolved against.
    ///
    /// Always ends with `/`.
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build a configuration for the given base URL.
    ///
    /// A trailing `/` is appended when missing so the resource path is
    /// resolved beneath the base rather than replacing its last segment.
    /// The base must not carry a query string or fragment, since resource
    /// paths are appended to it.
    pub fn new(api_url: &str) -> Result<Self, ClientError> {
        let parsed = reqwest::Url::parse(api_url)
            .map_err(|e| ClientError::Config(format!("invalid api url {api_url:?}: {e}")))?;

        if parsed.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "api url {api_url:?} cannot be used as a base"
            )));
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ClientError::Config(format!(
                "api url {api_url:?} must not carry a query or fragment"
            )));
        }

        let mut api_url = parsed.to_string();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }

        Ok(Self { api_url })
    }

    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `HEROES_API_URL` -- base URL of the hero API (default
    ///   `http://localhost:8080/`)
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        lookup("HEROES_API_URL").map_or_else(|| Ok(Self::default()), |url| Self::new(&url))
    }
}
