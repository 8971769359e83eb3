//! Shared error type across AegisAI crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// A legacy probe could not produce a reading.
    ProbeFailed,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::ProbeFailed => "PROBE_FAILED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AegisError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum AegisError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("probe failed: {0}")]
    ProbeFailed(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AegisError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            AegisError::BadRequest(_) => ClientCode::BadRequest,
            AegisError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            AegisError::ProbeFailed(_) => ClientCode::ProbeFailed,
            AegisError::Internal(_) => ClientCode::Internal,
        }
    }
}
