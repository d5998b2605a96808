//! # voyage-core: Pure Business Logic for the Voyage Quoter
//!
//! This crate is the **heart** of the quoter. It contains the pricing rules
//! and the cart as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Voyage Quoter Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (browser page)                  │   │
//! │  │    Quote form ──► Result card ──► Cart drawer ──► Checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    voyage-quoter (apps/quoter)                  │   │
//! │  │    calculate_quote, add_to_cart, remove_from_cart, checkout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ voyage-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   cart    │  │ validation│  │   │
//! │  │   │Destination│  │  price()  │  │   Cart    │  │   rules   │  │   │
//! │  │   │ Quotation │  │ breakdown │  │  total()  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TIMERS • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 voyage-store (Key-Value Layer)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Destination, QuoteRequest, Quotation, Customer)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - The quotation engine
//! - [`cart`] - Ordered collection of accepted quotations
//! - [`catalog`] - The built-in destination catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Quote form validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use voyage_core::{catalog, pricing, PromoCode, QuoteRequest, Regimen};
//!
//! let catalog = catalog::builtin();
//! let request = QuoteRequest {
//!     destination_id: "punta-cana".to_string(),
//!     departure: None,
//!     adults: 2,
//!     minors: 1,
//!     nights: 3,
//!     regimen: Regimen::parse("all-inclusive"),
//!     promo: PromoCode::parse("viaja10"),
//! };
//!
//! let quote = pricing::price(&request, &catalog, Utc::now()).unwrap();
//! assert_eq!(quote.total, 828);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Weight of a minor in paying units, in tenths (minors pay 60%).
pub const MINOR_WEIGHT_TENTHS: i64 = 6;

/// Weight of an adult in paying units, in tenths.
pub const ADULT_WEIGHT_TENTHS: i64 = 10;

/// Placeholder shown in the quote detail when no departure date was given.
pub const NO_DEPARTURE_PLACEHOLDER: &str = "—";
