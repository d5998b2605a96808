//! # Domain Types
//!
//! Core domain types used throughout the quoter.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Destination    │   │  QuoteRequest   │   │   Quotation     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  destination_id │──►│  id (dest+ms)   │       │
//! │  │  base rate      │   │  adults/minors  │   │  title, detail  │       │
//! │  │  tax rate       │   │  nights         │   │  total (units)  │       │
//! │  │  upgrades       │   │  regimen, promo │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │    Regimen      │   │   PromoCode     │       │
//! │  │  bps (u32)      │   │  RoomOnly       │   │  None           │       │
//! │  │  1800 = 18%     │   │  Upgrade(kind)  │   │  Viaja10 ×0.90  │       │
//! │  └─────────────────┘   │  Unrecognized   │   │  Black15 ×0.85  │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, CENTS_PER_UNIT};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%; 1800 bps = 18%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a fraction (`0.18` → 1800 bps).
    pub fn from_fraction(fraction: f64) -> Self {
        TaxRate((fraction * 10_000.0).round().max(0.0) as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (for display only).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate(0)
    }
}

// =============================================================================
// Upgrades and Regimen
// =============================================================================

/// A named per-night surcharge a destination may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum UpgradeKind {
    /// Breakfast included.
    Breakfast,
    /// All meals and drinks included.
    AllInclusive,
}

impl UpgradeKind {
    /// The code used in forms and in the catalog.
    pub const fn code(&self) -> &'static str {
        match self {
            UpgradeKind::Breakfast => "breakfast",
            UpgradeKind::AllInclusive => "all-inclusive",
        }
    }
}

/// The meal/service tier chosen in the quote form.
///
/// Parsing never fails and is exact: `"ALL-INCLUSIVE"` or `" breakfast"`
/// name no upgrade. Such codes are kept verbatim as `Unrecognized` so they
/// still show in the quote title, and price at zero surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Regimen {
    /// No upgrade (`"none"`).
    RoomOnly,
    /// One of the catalog upgrades.
    Upgrade(UpgradeKind),
    /// Any other code, blank included.
    Unrecognized(String),
}

impl Regimen {
    /// Parses a form code. Case and whitespace are significant.
    pub fn parse(code: &str) -> Self {
        match code {
            "none" => Regimen::RoomOnly,
            "breakfast" => Regimen::Upgrade(UpgradeKind::Breakfast),
            "all-inclusive" => Regimen::Upgrade(UpgradeKind::AllInclusive),
            _ => Regimen::Unrecognized(code.to_string()),
        }
    }

    /// The form code this regimen was parsed from.
    pub fn code(&self) -> &str {
        match self {
            Regimen::RoomOnly => "none",
            Regimen::Upgrade(kind) => kind.code(),
            Regimen::Unrecognized(code) => code,
        }
    }

    /// Label used in quote titles: the raw code with `-` shown as a space
    /// (`all-inclusive` → `all inclusive`, blank stays blank).
    pub fn label(&self) -> String {
        self.code().replace('-', " ")
    }

    /// The upgrade this regimen asks for, if any.
    pub fn upgrade(&self) -> Option<UpgradeKind> {
        match self {
            Regimen::Upgrade(kind) => Some(*kind),
            Regimen::RoomOnly | Regimen::Unrecognized(_) => None,
        }
    }
}

impl Default for Regimen {
    fn default() -> Self {
        Regimen::RoomOnly
    }
}

impl fmt::Display for Regimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for Regimen {
    fn from(code: String) -> Self {
        Regimen::parse(&code)
    }
}

impl From<Regimen> for String {
    fn from(regimen: Regimen) -> Self {
        regimen.code().to_string()
    }
}

// =============================================================================
// Promo Code
// =============================================================================

/// A discount token entered in the quote form.
///
/// The two codes are disjoint literals, so at most one can ever match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PromoCode {
    /// Blank or unknown code: no discount.
    #[default]
    None,
    /// `VIAJA10`: 10% off.
    Viaja10,
    /// `BLACK15`: 15% off.
    Black15,
}

impl PromoCode {
    /// Parses a form code, case-insensitive and trimmed.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "VIAJA10" => PromoCode::Viaja10,
            "BLACK15" => PromoCode::Black15,
            _ => PromoCode::None,
        }
    }

    /// Canonical code (empty for `None`).
    pub const fn code(&self) -> &'static str {
        match self {
            PromoCode::None => "",
            PromoCode::Viaja10 => "VIAJA10",
            PromoCode::Black15 => "BLACK15",
        }
    }

    /// Multiplier applied to the taxed total, in basis points.
    pub const fn multiplier_bps(&self) -> u32 {
        match self {
            PromoCode::None => 10_000,
            PromoCode::Viaja10 => 9_000,
            PromoCode::Black15 => 8_500,
        }
    }
}

impl From<String> for PromoCode {
    fn from(code: String) -> Self {
        PromoCode::parse(&code)
    }
}

impl From<PromoCode> for String {
    fn from(promo: PromoCode) -> Self {
        promo.code().to_string()
    }
}

// =============================================================================
// Destination
// =============================================================================

/// A destination offered by the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Stable identifier (`punta-cana`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price per paying unit per night.
    pub base_nightly_rate: Money,

    /// Tax applied on the subtotal.
    pub tax_rate: TaxRate,

    /// Per-night surcharges by upgrade.
    pub upgrades: BTreeMap<UpgradeKind, Money>,
}

impl Destination {
    /// Surcharge for a regimen; zero when the regimen is not an upgrade this
    /// destination offers.
    pub fn surcharge(&self, regimen: &Regimen) -> Money {
        regimen
            .upgrade()
            .and_then(|kind| self.upgrades.get(&kind).copied())
            .unwrap_or_default()
    }
}

// =============================================================================
// Quote Request
// =============================================================================

/// Ephemeral pricing input, already coerced to the expected types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub destination_id: String,

    /// Departure date as entered (display only).
    pub departure: Option<String>,

    pub adults: u32,
    pub minors: u32,
    pub nights: u32,

    #[ts(as = "String")]
    pub regimen: Regimen,

    #[ts(as = "String")]
    pub promo: PromoCode,
}

// =============================================================================
// Quotation
// =============================================================================

/// A priced, immutable snapshot of a quote request.
///
/// `total` is in whole currency units, already rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    /// `{destination_id}-{unix millis}`.
    pub id: String,
    pub destination_id: String,
    pub title: String,
    pub detail: String,
    pub total: i64,
}

impl Quotation {
    /// The total as Money.
    #[inline]
    pub fn total_money(&self) -> Money {
        Money::from_cents(self.total.saturating_mul(CENTS_PER_UNIT))
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Contact details typed into the quote form. Last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

impl Default for Customer {
    /// The demo customer used when nothing valid is stored.
    fn default() -> Self {
        Customer {
            name: "Alexander".to_string(),
            email: "alex@demo.com".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_fraction() {
        assert_eq!(TaxRate::from_fraction(0.18).bps(), 1800);
        assert_eq!(TaxRate::from_fraction(0.16).bps(), 1600);
        assert!((TaxRate::from_bps(1900).fraction() - 0.19).abs() < 1e-9);
    }

    #[test]
    fn test_regimen_parsing() {
        assert_eq!(Regimen::parse("none"), Regimen::RoomOnly);
        assert_eq!(
            Regimen::parse("all-inclusive"),
            Regimen::Upgrade(UpgradeKind::AllInclusive)
        );
        assert_eq!(
            Regimen::parse("breakfast"),
            Regimen::Upgrade(UpgradeKind::Breakfast)
        );
        assert_eq!(
            Regimen::parse("lux"),
            Regimen::Unrecognized("lux".to_string())
        );
    }

    #[test]
    fn test_regimen_codes_are_case_sensitive() {
        assert_eq!(
            Regimen::parse("ALL-INCLUSIVE"),
            Regimen::Unrecognized("ALL-INCLUSIVE".to_string())
        );
        assert_eq!(
            Regimen::parse(" breakfast"),
            Regimen::Unrecognized(" breakfast".to_string())
        );
        assert_eq!(Regimen::parse("NONE").upgrade(), None);
    }

    #[test]
    fn test_regimen_label() {
        assert_eq!(Regimen::parse("all-inclusive").label(), "all inclusive");
        assert_eq!(Regimen::parse("none").label(), "none");
        assert_eq!(Regimen::parse("").label(), "");
        assert_eq!(Regimen::parse("Lux").label(), "Lux");
        assert_eq!(Regimen::parse("half-board-plus").label(), "half board plus");
    }

    #[test]
    fn test_promo_parsing() {
        assert_eq!(PromoCode::parse(" viaja10 "), PromoCode::Viaja10);
        assert_eq!(PromoCode::parse("BLACK15"), PromoCode::Black15);
        assert_eq!(PromoCode::parse(""), PromoCode::None);
        assert_eq!(PromoCode::parse("FREE100"), PromoCode::None);
        assert_eq!(PromoCode::Black15.multiplier_bps(), 8_500);
    }

    #[test]
    fn test_surcharge_unknown_upgrade_is_zero() {
        let destination = Destination {
            id: "x".to_string(),
            name: "X".to_string(),
            base_nightly_rate: Money::from_major(50),
            tax_rate: TaxRate::from_bps(1000),
            upgrades: BTreeMap::from([(UpgradeKind::Breakfast, Money::from_major(5))]),
        };

        assert_eq!(
            destination.surcharge(&Regimen::Upgrade(UpgradeKind::Breakfast)),
            Money::from_major(5)
        );
        assert!(destination
            .surcharge(&Regimen::Upgrade(UpgradeKind::AllInclusive))
            .is_zero());
        assert!(destination.surcharge(&Regimen::parse("lux")).is_zero());
        assert!(destination.surcharge(&Regimen::parse("Breakfast")).is_zero());
    }

    #[test]
    fn test_request_serde_uses_codes() {
        let request = QuoteRequest {
            destination_id: "cancun".to_string(),
            departure: None,
            adults: 1,
            minors: 0,
            nights: 2,
            regimen: Regimen::parse("all-inclusive"),
            promo: PromoCode::parse("black15"),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["regimen"], "all-inclusive");
        assert_eq!(json["promo"], "BLACK15");
        assert_eq!(json["destinationId"], "cancun");

        let back: QuoteRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_customer_default() {
        let customer = Customer::default();
        assert_eq!(customer.name, "Alexander");
        assert_eq!(customer.email, "alex@demo.com");
    }
}
