use thiserror::Error;

/// User-facing message for a query with a blank city or country.
pub const MISSING_INPUT_MESSAGE: &str = "Please enter both city and country";

/// Errors produced by one query/response cycle.
#[derive(Debug, Error)]
pub enum FinderError {
    /// City or country was blank after trimming. No request is made.
    #[error("Please enter both city and country")]
    MissingInput,

    /// The service answered with `"status": "error"`.
    #[error("{0}")]
    Service(String),

    /// Connection, TLS, timeout or body-read failure.
    #[error("request to {context} failed: {source}")]
    Transport {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The response body was not the expected JSON envelope.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response status \"{0}\"")]
    UnexpectedStatus(String),

    /// One entry of `data` did not describe a usable business.
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// The three ways a search can end badly, as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    ServiceError,
    TransportFailure,
}

impl FinderError {
    /// Wraps a lower-level client failure with the URL it happened on.
    pub fn transport(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            context: context.into(),
            source: Box::new(source),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput => ErrorKind::MissingInput,
            Self::Service(_) => ErrorKind::ServiceError,
            Self::Transport { .. }
            | Self::Deserialize { .. }
            | Self::UnexpectedStatus(_)
            | Self::MalformedRecord { .. } => ErrorKind::TransportFailure,
        }
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_displays_user_message() {
        assert_eq!(
            FinderError::MissingInput.to_string(),
            "Please enter both city and country"
        );
    }

    #[test]
    fn service_error_displays_message_verbatim() {
        let err = FinderError::Service("No results".to_string());
        assert_eq!(err.to_string(), "No results");
        assert_eq!(err.kind(), ErrorKind::ServiceError);
    }

    #[test]
    fn decode_failures_are_transport_failures() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FinderError::Deserialize {
            context: "search".to_string(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
        assert_eq!(
            FinderError::UnexpectedStatus("pending".to_string()).kind(),
            ErrorKind::TransportFailure
        );
        assert_eq!(
            FinderError::MalformedRecord {
                index: 0,
                reason: "blank name".to_string()
            }
            .kind(),
            ErrorKind::TransportFailure
        );
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = ConfigError::InvalidEnvVar {
            var: "RECYCLEFIND_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for RECYCLEFIND_REQUEST_TIMEOUT_SECS: invalid digit found in string"
        );
    }

    #[test]
    fn transport_error_includes_context() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = FinderError::transport("http://localhost:1/api/search", io);
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
        assert_eq!(
            err.to_string(),
            "request to http://localhost:1/api/search failed: connection refused"
        );
    }
}
