//! Marketplace configuration loaded from JSON.
//!
//! Every field is optional. Missing fields fall back to the built-in
//! rate table, chiller list and default origin.
//!
//! ```json
//! {
//!   "tiers": [
//!     { "name": "Standard", "base_rate_per_litre": 1.0, "temperature_range_label": "-2°C to 0°C" }
//!   ],
//!   "default_origin": { "latitude": 28.6139, "longitude": 77.2090 }
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chiller::ChillerListing;
use crate::directory::reference_chillers;
use crate::error::ConfigError;
use crate::location::GeoPoint;
use crate::rate::RateTable;
use crate::state::NEW_DELHI;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub tiers: RateTable,
    pub chillers: Vec<ChillerListing>,
    pub default_origin: GeoPoint,
}

impl Default for MarketConfig {
    fn default() -> Self {
        MarketConfig {
            tiers: RateTable::default(),
            chillers: reference_chillers(),
            default_origin: NEW_DELHI,
        }
    }
}

impl MarketConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<MarketConfig, ConfigError> {
        let config: MarketConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<MarketConfig, ConfigError> {
        let path = path.as_ref();
        info!("Loading market config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that tier names are unique, rates are positive and every
    /// coordinate is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.tiers().is_empty() {
            return Err(ConfigError::Invalid("rate table is empty".to_string()));
        }
        let mut names = HashSet::new();
        for tier in self.tiers.tiers() {
            if !names.insert(tier.name.to_lowercase()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate tier name: {}",
                    tier.name
                )));
            }
            if !tier.base_rate_per_litre.is_finite() || tier.base_rate_per_litre <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "tier {} has invalid base rate {}",
                    tier.name, tier.base_rate_per_litre
                )));
            }
        }

        let mut ids = HashSet::new();
        for chiller in &self.chillers {
            let id = &chiller.location.id;
            if !ids.insert(id.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate chiller id: {}", id)));
            }
            if !chiller.location.coordinates.is_valid() {
                return Err(ConfigError::Invalid(format!(
                    "chiller {} has out-of-range coordinates",
                    id
                )));
            }
        }

        if !self.default_origin.is_valid() {
            return Err(ConfigError::Invalid(
                "default origin has out-of-range coordinates".to_string(),
            ));
        }
        Ok(())
    }
}
