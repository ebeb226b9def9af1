//! Definition of the [`RateTier`] reference data and the
//! [`RateTable`] that resolves tier names.

use serde::{Deserialize, Serialize};

use crate::error::UnknownTierError;

/// A named service level with a base price per litre for an 8-hour
/// cooling window.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RateTier {
    pub name: String,
    pub base_rate_per_litre: f64,
    pub temperature_range_label: String,
}

impl RateTier {
    fn new(name: &str, base_rate_per_litre: f64, temperature_range_label: &str) -> RateTier {
        RateTier {
            name: name.to_string(),
            base_rate_per_litre,
            temperature_range_label: temperature_range_label.to_string(),
        }
    }
}

/// Ordered collection of tiers. Lookups ignore case and surrounding
/// whitespace.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    tiers: Vec<RateTier>,
}

impl RateTable {
    pub fn new(tiers: Vec<RateTier>) -> RateTable {
        RateTable { tiers }
    }

    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    /// Resolves a tier by name.
    ///
    /// # Errors
    /// [`UnknownTierError`] carrying the valid names when nothing
    /// matches.
    pub fn find(&self, name: &str) -> Result<&RateTier, UnknownTierError> {
        let wanted = name.trim();
        self.tiers
            .iter()
            .find(|tier| tier.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTierError {
                requested: name.to_string(),
                valid: self.names(),
            })
    }

    /// Lowercase tier names in table order.
    pub fn names(&self) -> Vec<String> {
        self.tiers
            .iter()
            .map(|tier| tier.name.to_lowercase())
            .collect()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable::new(vec![
            RateTier::new("Standard", 1.0, "-2°C to 0°C"),
            RateTier::new("Premium", 1.5, "-3°C to -1°C"),
            RateTier::new("Express", 2.0, "-4°C to -2°C"),
        ])
    }
}
