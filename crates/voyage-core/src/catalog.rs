//! # Destination Catalog
//!
//! The fixed, ordered list of destinations the quoter sells. Delivery (the
//! simulated remote fetch) lives in the app crate; this module only owns the
//! data and lookups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Destination, TaxRate, UpgradeKind};

/// An ordered set of destinations, looked up by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Builds a catalog keeping the given order.
    pub fn new(destinations: Vec<Destination>) -> Self {
        Catalog { destinations }
    }

    /// Finds a destination by id.
    pub fn find(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Destinations in catalog order.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

fn destination(
    id: &str,
    name: &str,
    base_nightly: i64,
    tax_bps: u32,
    breakfast: i64,
    all_inclusive: i64,
) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        base_nightly_rate: Money::from_major(base_nightly),
        tax_rate: TaxRate::from_bps(tax_bps),
        upgrades: BTreeMap::from([
            (UpgradeKind::Breakfast, Money::from_major(breakfast)),
            (UpgradeKind::AllInclusive, Money::from_major(all_inclusive)),
        ]),
    }
}

/// The built-in catalog (USD per paying unit per night).
pub fn builtin() -> Catalog {
    Catalog::new(vec![
        destination("punta-cana", "Punta Cana", 65, 1800, 8, 35),
        destination("rio-de-janeiro", "Rio de Janeiro", 55, 1600, 6, 28),
        destination("cancun", "Cancún", 70, 1900, 9, 38),
    ])
}
