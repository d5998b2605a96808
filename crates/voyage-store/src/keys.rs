//! Well-known storage keys.

/// Serialized quotation sequence.
pub const CART: &str = "cart";

/// Serialized customer record.
pub const CUSTOMER: &str = "customer";
