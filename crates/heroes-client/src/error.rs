//! Error types for the hero data-access client.
//!
//! Every variant describes one way a remote operation can fail. None of
//! them escape [`HeroService`](crate::HeroService): the service traps them,
//! writes the description to the message log, and substitutes a fallback
//! value. They are public so configuration loading can report problems.

use reqwest::StatusCode;

/// Errors that can occur while talking to the remote hero collection.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Http failure response for {url}: {status}")]
    Status {
        /// The URL the request was sent to.
        url: String,
        /// The status the server answered with.
        status: StatusCode,
    },

    /// The response body was not the expected JSON.
    #[error("response decode failed: {0}")]
    Decode(#[source] reqwest::Error),

    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url_and_status() {
        let error = ClientError::Status {
            url: "http://localhost:8080/api/heroes/99".to_owned(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            error.to_string(),
            "Http failure response for http://localhost:8080/api/heroes/99: 404 Not Found"
        );
    }

    #[test]
    fn config_error_message() {
        let error = ClientError::Config("missing base".to_owned());
        assert_eq!(error.to_string(), "config error: missing base");
    }
}
