//! # Error Types
//!
//! Domain-specific error types for voyage-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  voyage-core errors (this file)                                        │
//! │  ├── CoreError        - Pricing failures                               │
//! │  └── ValidationError  - Quote form validation failures                 │
//! │                                                                         │
//! │  voyage-store errors (separate crate)                                  │
//! │  └── StoreError       - Key-value store failures                       │
//! │                                                                         │
//! │  voyage-quoter errors (app)                                            │
//! │  └── ApiError         - What the presentation sees (serialized)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Toast                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown promo codes and regimens are NOT errors: they have no effect.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The quote request references a destination that is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Form submitted before the catalog finished loading
    /// - Stale destination id from a previous catalog
    ///
    /// Fatal to that single pricing attempt; never retried.
    #[error("Invalid destination: {0}")]
    InvalidDestination(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the presentation boundary, before the pricing engine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
