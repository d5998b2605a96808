//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Paying units are fractional (a minor counts 0.6), the tax rate is a   │
//! │  fraction and so is the promo multiplier. Chaining three float         │
//! │  multiplications makes a .5 boundary land on either side of it.        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Catalog amounts are cents, rates are basis points, and the engine   │
//! │    multiplies exact integers, rounding only once at the very end.      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use voyage_core::money::Money;
//!
//! let nightly = Money::from_major(65); // $65.00
//! let upgrade = Money::from_cents(3500); // $35.00
//! assert_eq!((nightly + upgrade).cents(), 10_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

/// Cents per major currency unit.
pub const CENTS_PER_UNIT: i64 = 100;

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: the engine never produces negatives from valid input,
///   but arithmetic stays closed under subtraction
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use voyage_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(65).cents(), 6500);
    /// ```
    #[inline]
    pub const fn from_major(units: i64) -> Self {
        Money(units * CENTS_PER_UNIT)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Rounds to whole currency units, half away from negative infinity.
    ///
    /// ## Example
    /// ```rust
    /// use voyage_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(82_836).round_to_major(), 828);
    /// assert_eq!(Money::from_cents(92_050).round_to_major(), 921);
    /// assert_eq!(Money::from_cents(-150).round_to_major(), -1);
    /// ```
    pub fn round_to_major(&self) -> i64 {
        round_half_up(self.0 as i128, CENTS_PER_UNIT as i128) as i64
    }
}

/// Divides `value` by `divisor` rounding half up (towards +∞ on ties).
///
/// Matches the usual "round" of a display calculator: `2.5 → 3`,
/// `-2.5 → -2`. `divisor` must be positive.
pub(crate) fn round_half_up(value: i128, divisor: i128) -> i128 {
    value.saturating_add(divisor / 2).div_euclid(divisor)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display (`$12.34`). Presentation uses the app formatter.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
