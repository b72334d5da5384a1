//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use thiserror::Error;
use uiconfig_core::{CoreError, StoreError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested item does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The item changed since the supplied etag was read.
    #[error("{0}")]
    Conflict(String),

    /// The storage service could not serve the request.
    #[error("{0}")]
    Unavailable(String),

    /// The storage service answered with something unexpected.
    #[error("{0}")]
    Protocol(String),

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Input document could not be decoded.
    #[error("Invalid input document: {0}")]
    Data(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) | Self::Conflict(_) => 1,
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::Data(_) => 65,        // EX_DATAERR
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,          // EX_IOERR
            Self::Protocol(_) => 76,    // EX_PROTOCOL
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::NotFound { .. } => Self::NotFound(message),
            StoreError::Conflict { .. } => Self::Conflict(format!(
                "{message}; fetch the latest ETag and retry"
            )),
            StoreError::Unavailable { .. } => Self::Unavailable(message),
            StoreError::InvalidResponse { .. } => Self::Protocol(message),
            StoreError::Configuration { .. } => Self::Config(message),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Store(store_err) => store_err.into(),
            CoreError::Serialization(msg) => Self::Protocol(msg),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Data(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::NotFound(String::new()).exit_code(), 1);
        assert_eq!(CliError::Conflict(String::new()).exit_code(), 1);
        assert_eq!(CliError::Arguments(String::new()).exit_code(), 2);
        assert_eq!(CliError::Unavailable(String::new()).exit_code(), 69);
        assert_eq!(CliError::Io(String::new()).exit_code(), 74);
        assert_eq!(CliError::Config(String::new()).exit_code(), 78);
    }

    #[test]
    fn test_store_errors_map_to_cli_errors() {
        let err: CliError = CoreError::from(StoreError::NotFound {
            collection: "profiles".to_string(),
            key: "p1".to_string(),
        })
        .into();
        assert!(matches!(err, CliError::NotFound(_)));
        assert!(err.to_string().contains("profiles/p1"));

        let err: CliError = CoreError::from(StoreError::Conflict {
            collection: "profiles".to_string(),
            key: "p1".to_string(),
        })
        .into();
        assert!(matches!(err, CliError::Conflict(_)));
        assert!(err.to_string().contains("ETag"));

        let err: CliError = StoreError::Unavailable {
            message: "connection refused".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 69);

        let err: CliError = StoreError::Configuration {
            message: "bad url".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_validation_is_argument_error() {
        let err: CliError = CoreError::Validation("id must not be empty".to_string()).into();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_and_json_errors() {
        let err: CliError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert!(matches!(err, CliError::Io(_)));

        let err: CliError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.exit_code(), 65);
    }
}
