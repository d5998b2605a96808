//! # API Error Type
//!
//! Unified error type for commands, plus the startup error.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Voyage                                 │
//! │                                                                         │
//! │  Presentation                Rust Session                               │
//! │  ────────────                ────────────                               │
//! │                                                                         │
//! │  calculate_quote(form)                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── ValidationError ─────────┐               │  │
//! │  │         │                                       │               │  │
//! │  │         ▼                                       ▼               │  │
//! │  │  Unknown destination? ─ CoreError ──────────── ApiError ───────►│  │
//! │  │         │                                       ▲               │  │
//! │  │         ▼                                       │               │  │
//! │  │  Store write failed? ── StoreError ─────────────┘               │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "VALIDATION_ERROR", "message": "nights must be positive" }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;
use voyage_core::{CoreError, ValidationError};
use voyage_store::StoreError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Destination not found: atlantis"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced destination or item does not exist
    NotFound,

    /// Form input rejected
    ValidationError,

    /// Store write failed; the in-memory change was kept
    StorageError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidDestination(id) => ApiError::not_found("Destination", &id),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Log the actual error but return a generic message
        tracing::error!(error = %err, "Store operation failed");
        ApiError::new(ErrorCode::StorageError, "Could not save your changes")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Errors that stop the session from starting.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Config file is not valid TOML for [`crate::state::AppConfig`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config values are out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// No platform data directory and no explicit database path.
    #[error("Could not determine app data directory")]
    NoDataDir,

    /// Store could not be opened.
    #[error("Store unavailable: {0}")]
    Store(#[from] StoreError),
}

/// Result type for session startup.
pub type AppResult<T> = Result<T, AppError>;
