//! Error types for the CryptoMine CLI

use thiserror::Error;

/// Result type alias for CryptoMine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown for any request that never got an HTTP response
pub const UNREACHABLE_MESSAGE: &str = "Cannot reach server";

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dashboard could not be fetched; the session is left in place
    #[error("Failed to load data")]
    LoadFailed(#[source] Box<Error>),

    /// Form input rejected locally, before any request was made
    #[error("{0}")]
    Validation(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

impl Error {
    /// Replace a message-less HTTP rejection with an operation-specific one.
    ///
    /// Server-supplied messages always win; transport failures keep their
    /// generic wording.
    pub fn or_fallback(self, fallback: &str) -> Self {
        match self {
            Error::Api(ApiError::Rejected {
                status,
                message: None,
            }) => Error::Api(ApiError::Rejected {
                status,
                message: Some(fallback.to_string()),
            }),
            other => other,
        }
    }

    /// True when the server answered with 401 and the session must be dropped
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Error::Api(ApiError::Rejected { status: 401, .. })
        )
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP response arrived with a non-success status
    #[error("{}", rejected_message(.status, .message))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// No HTTP response at all (DNS, connect, TLS, reset)
    #[error("{}", UNREACHABLE_MESSAGE)]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

fn rejected_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(msg) => msg.clone(),
        None => format!("Request rejected (HTTP {})", status),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ApiError::Network("Failed to connect to server".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `cryptomine login` to create one.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_shows_server_message_verbatim() {
        let err = ApiError::Rejected {
            status: 409,
            message: Some("User with this email already exists".to_string()),
        };
        assert_eq!(err.to_string(), "User with this email already exists");
    }

    #[test]
    fn test_rejected_without_message_mentions_status() {
        let err = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_network_error_is_generic() {
        let err = ApiError::Network("connection refused (os error 111)".to_string());
        assert_eq!(err.to_string(), "Cannot reach server");
    }

    #[test]
    fn test_invalid_response() {
        let err = ApiError::InvalidResponse("missing field `user`".to_string());
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_or_fallback_fills_missing_message() {
        let err: Error = ApiError::Rejected {
            status: 401,
            message: None,
        }
        .into();

        let err = err.or_fallback("Invalid credentials");
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_or_fallback_keeps_server_message() {
        let err: Error = ApiError::Rejected {
            status: 401,
            message: Some("Invalid 2FA code".to_string()),
        }
        .into();

        let err = err.or_fallback("Invalid code");
        assert_eq!(err.to_string(), "Invalid 2FA code");
    }

    #[test]
    fn test_or_fallback_leaves_network_errors_alone() {
        let err: Error = ApiError::Network("timeout".to_string()).into();
        let err = err.or_fallback("Registration failed");
        assert_eq!(err.to_string(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_is_unauthorized() {
        let unauthorized: Error = ApiError::Rejected {
            status: 401,
            message: Some("Invalid session".to_string()),
        }
        .into();
        let server: Error = ApiError::Rejected {
            status: 500,
            message: None,
        }
        .into();

        assert!(unauthorized.is_unauthorized());
        assert!(!server.is_unauthorized());
        assert!(!Error::Validation("x".to_string()).is_unauthorized());
    }

    #[test]
    fn test_load_failed_hides_cause_in_message() {
        let cause: Error = ApiError::Network("reset by peer".to_string()).into();
        let err = Error::LoadFailed(Box::new(cause));

        assert_eq!(err.to_string(), "Failed to load data");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_validation_message_is_bare() {
        let err = Error::Validation("Fill in all fields".to_string());
        assert_eq!(err.to_string(), "Fill in all fields");
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("cryptomine login"));
    }

    #[test]
    fn test_error_from_config_error() {
        let cfg_err = ConfigError::NotFound;
        let err: Error = cfg_err.into();

        match err {
            Error::Config(ConfigError::NotFound) => (),
            _ => panic!("Expected Error::Config(ConfigError::NotFound)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "session_token: [unterminated";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
