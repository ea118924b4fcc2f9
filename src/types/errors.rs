//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the order management service.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation errors (map to gRPC INVALID_ARGUMENT).
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found (map to gRPC NOT_FOUND).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid configuration, e.g. an unparseable listen address.
    #[error("config error: {0}")]
    Config(String),

    /// Descriptor pool could not be decoded or a registered service is missing.
    #[error("descriptor error: {0}")]
    Descriptor(String),

    /// Internal errors (map to gRPC INTERNAL).
    #[error("internal error: {0}")]
    Internal(String),

    /// gRPC transport errors.
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Convert to gRPC status code.
    pub fn to_grpc_status(&self) -> tonic::Status {
        match self {
            Error::Validation(msg) => tonic::Status::invalid_argument(msg),
            Error::NotFound(msg) => tonic::Status::not_found(msg),
            Error::Config(msg) | Error::Descriptor(msg) | Error::Internal(msg) => {
                tonic::Status::internal(msg)
            }
            Error::Transport(e) => tonic::Status::unavailable(format!("transport error: {}", e)),
            Error::Io(e) => tonic::Status::internal(format!("io error: {}", e)),
        }
    }
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn descriptor(msg: impl Into<String>) -> Self {
        Self::Descriptor(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

// Implement From<Error> for Status to enable ? operator in gRPC handlers
impl From<Error> for tonic::Status {
    fn from(err: Error) -> Self {
        err.to_grpc_status()
    }
}
