//! Error handling module for forex-calendar
//!
//! This module defines the application-level error type. Transport and
//! decode failures keep their own variants so a caller can always tell a
//! network problem from a feed schema problem.

use thiserror::Error;

use crate::fetch::TransportError;
use crate::models::{DecodeError, FieldDecodeError};

/// Result type alias for forex-calendar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for forex-calendar
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The feed could not be fetched
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The feed was fetched but could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Serialization errors (output rendering)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// Check if repeating the operation could succeed.
    /// A feed that failed to decode will fail again until it changes.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(TransportError::Status { status, .. }) => *status >= 500 || *status == 429,
            Error::Transport(TransportError::Timeout(_)) | Error::Transport(TransportError::Request(_)) => true,
            _ => false,
        }
    }

    /// Short machine-readable error category
    pub fn error_type(&self) -> &'static str {
        match self {
            Error::Config(_) => "configuration_error",
            Error::Transport(_) => "transport_error",
            Error::Decode(_) => "decode_error",
            Error::Serialization(_) => "serialization_error",
            Error::Io(_) => "io_error",
            Error::Internal(_) => "internal_error",
        }
    }
}

impl From<FieldDecodeError> for Error {
    fn from(err: FieldDecodeError) -> Self {
        Error::Decode(DecodeError::Field(err))
    }
}

/// Convert from envconfig::Error to our Error type
impl From<envconfig::Error> for Error {
    fn from(err: envconfig::Error) -> Self {
        Error::Config(err.to_string())
    }
}
