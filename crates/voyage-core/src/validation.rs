//! # Validation Module
//!
//! Checks applied at the presentation boundary, before a request reaches
//! the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser form                                                 │
//! │  ├── input types, min attributes                                       │
//! │  └── immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: calculate_quote command                                      │
//! │  ├── THIS MODULE: coerce raw strings, nights > 0                       │
//! │  └── errors surface as a toast                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: pricing engine                                               │
//! │  └── trusts its input; unknown destination is the only failure         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::QuoteRequest;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Coerces a raw form count (adults, minors, nights) to an integer.
///
/// A blank field counts as zero, like an empty number input.
///
/// ## Example
/// ```rust
/// use voyage_core::validation::parse_count;
///
/// assert_eq!(parse_count("adults", " 2 ").unwrap(), 2);
/// assert_eq!(parse_count("minors", "").unwrap(), 0);
/// assert!(parse_count("adults", "two").is_err());
/// assert!(parse_count("adults", "-1").is_err());
/// ```
pub fn parse_count(field: &str, raw: &str) -> ValidationResult<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }

    raw.parse::<u32>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a whole number of zero or more".to_string(),
        })
}

/// Validates a request before pricing.
///
/// ## Rules
/// - A destination must be selected
/// - At least one night
pub fn validate_quote_request(request: &QuoteRequest) -> ValidationResult<()> {
    if request.destination_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "destination".to_string(),
        });
    }

    if request.nights == 0 {
        return Err(ValidationError::MustBePositive {
            field: "nights".to_string(),
        });
    }

    Ok(())
}
