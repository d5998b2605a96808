//! # Pricing Engine
//!
//! Turns a [`QuoteRequest`] into a [`Quotation`] against a [`Catalog`].
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  paying units  = adults × 1.0 + minors × 0.6                           │
//! │  per night     = base nightly rate + upgrade surcharge (0 if unknown)   │
//! │  subtotal      = per night × paying units × nights                      │
//! │  taxes         = subtotal × tax rate                                    │
//! │  total         = (subtotal + taxes) × promo multiplier                  │
//! │                  rounded half-up to whole currency units                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exactness
//! Every factor is an integer at a known scale: cents, tenths of a paying
//! unit, basis points. The product is carried in `i128` and rounded exactly
//! once, so `920.4 × 0.9 = 828.36` rounds to 828 without float drift.
//! Products saturate instead of wrapping, so extreme counts clamp at
//! `i64::MAX` and a total is never negative.

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::{round_half_up, Money, CENTS_PER_UNIT};
use crate::types::{Destination, PromoCode, QuoteRequest, Quotation};
use crate::{ADULT_WEIGHT_TENTHS, MINOR_WEIGHT_TENTHS, NO_DEPARTURE_PLACEHOLDER};

/// Denominator of a basis-point factor.
const BPS_SCALE: i128 = 10_000;

/// Denominator of a paying-unit count held in tenths.
const UNIT_SCALE: i128 = 10;

/// The intermediate figures behind a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// Weighted occupancy in tenths (2 adults + 1 minor = 26).
    pub paying_units_tenths: i64,

    /// Base rate plus the regimen surcharge.
    pub nightly_rate: Money,

    /// Before tax, rounded to the cent.
    pub subtotal: Money,

    /// Tax on the subtotal, rounded to the cent.
    pub taxes: Money,

    /// The discount that was applied.
    pub promo: PromoCode,

    /// Final total in whole currency units.
    pub total: i64,
}

/// Weighted occupancy in tenths of a paying unit.
pub fn paying_units_tenths(adults: u32, minors: u32) -> i64 {
    adults as i64 * ADULT_WEIGHT_TENTHS + minors as i64 * MINOR_WEIGHT_TENTHS
}

/// Computes the price of `request` at `destination`.
///
/// The destination id inside the request is not checked here; [`price`]
/// resolves it.
pub fn breakdown(request: &QuoteRequest, destination: &Destination) -> PriceBreakdown {
    let units = paying_units_tenths(request.adults, request.minors);
    let nightly_rate = destination.base_nightly_rate + destination.surcharge(&request.regimen);
    let tax_bps = destination.tax_rate.bps() as i128;
    let promo = request.promo;

    // cents × tenths
    let subtotal_scaled = (nightly_rate.cents() as i128)
        .saturating_mul(units as i128)
        .saturating_mul(request.nights as i128);
    let subtotal = round_half_up(subtotal_scaled, UNIT_SCALE);
    let taxes = round_half_up(subtotal_scaled.saturating_mul(tax_bps), UNIT_SCALE * BPS_SCALE);

    let discounted = subtotal_scaled
        .saturating_mul(BPS_SCALE + tax_bps)
        .saturating_mul(promo.multiplier_bps() as i128);
    let total = round_half_up(
        discounted,
        CENTS_PER_UNIT as i128 * UNIT_SCALE * BPS_SCALE * BPS_SCALE,
    );

    PriceBreakdown {
        paying_units_tenths: units,
        nightly_rate,
        subtotal: Money::from_cents(clamp_i64(subtotal)),
        taxes: Money::from_cents(clamp_i64(taxes)),
        promo,
        total: clamp_i64(total),
    }
}

fn clamp_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Prices a quote request against the catalog.
///
/// ## Errors
/// [`CoreError::InvalidDestination`] when `request.destination_id` is not in
/// `catalog`.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use voyage_core::{catalog, pricing, PromoCode, QuoteRequest, Regimen};
///
/// let request = QuoteRequest {
///     destination_id: "punta-cana".to_string(),
///     departure: Some("2026-01-10".to_string()),
///     adults: 2,
///     minors: 1,
///     nights: 3,
///     regimen: Regimen::parse("all-inclusive"),
///     promo: PromoCode::None,
/// };
///
/// let quote = pricing::price(&request, &catalog::builtin(), Utc::now()).unwrap();
/// assert_eq!(quote.total, 920);
/// assert_eq!(quote.title, "Punta Cana · 3 nights (all inclusive)");
/// ```
pub fn price(
    request: &QuoteRequest,
    catalog: &Catalog,
    issued_at: DateTime<Utc>,
) -> CoreResult<Quotation> {
    let destination = catalog
        .find(&request.destination_id)
        .ok_or_else(|| CoreError::InvalidDestination(request.destination_id.clone()))?;

    let breakdown = breakdown(request, destination);

    Ok(Quotation {
        id: quotation_id(&destination.id, issued_at),
        destination_id: destination.id.clone(),
        title: title(destination, request),
        detail: detail(request),
        total: breakdown.total,
    })
}

/// `{destination_id}-{unix millis}`.
pub fn quotation_id(destination_id: &str, issued_at: DateTime<Utc>) -> String {
    format!("{}-{}", destination_id, issued_at.timestamp_millis())
}

fn title(destination: &Destination, request: &QuoteRequest) -> String {
    format!(
        "{} · {} nights ({})",
        destination.name,
        request.nights,
        request.regimen.label()
    )
}

fn detail(request: &QuoteRequest) -> String {
    let departure = request
        .departure
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DEPARTURE_PLACEHOLDER);

    format!(
        "{} adults · {} minors · departure {}",
        request.adults, request.minors, departure
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
