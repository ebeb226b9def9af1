//! Stores the process-wide marketplace state.
//!
//! The rate table, chiller list and default origin are set once at
//! startup from a [`MarketConfig`] and read lock-free afterwards. Reads
//! before initialization see the built-in defaults, which then become
//! permanent for the process.

use once_cell::sync::OnceCell;

use crate::chiller::ChillerListing;
use crate::config::MarketConfig;
use crate::directory::reference_chillers;
use crate::error::{ConfigError, UnknownTierError};
use crate::estimator::{CostBreakdown, CostEstimator};
use crate::location::GeoPoint;
use crate::ranker::{rank_by_distance, Ranked};
use crate::rate::RateTable;

/// Central New Delhi, the reference point when no user location is
/// available.
pub static NEW_DELHI: GeoPoint = GeoPoint::new(28.6139, 77.2090);

/// Everything configured at startup. Set as a whole so a failed
/// initialization never leaves a mix of configured and default parts.
#[derive(Debug)]
struct MarketState {
    estimator: CostEstimator,
    chillers: Vec<ChillerListing>,
    default_origin: GeoPoint,
}

impl Default for MarketState {
    fn default() -> Self {
        MarketState {
            estimator: CostEstimator::default(),
            chillers: reference_chillers(),
            default_origin: NEW_DELHI,
        }
    }
}

static STATE: OnceCell<MarketState> = OnceCell::new();

/// Initializes all state from `config`.
///
/// # Errors
/// [`ConfigError::Invalid`] if the config fails validation and
/// [`ConfigError::AlreadyInitialized`] if the state was already set or
/// read. In both cases the current state is left as it was.
pub fn init_from_config(config: MarketConfig) -> Result<(), ConfigError> {
    info!("Initializing marketplace state");
    config.validate()?;
    let MarketConfig {
        tiers,
        chillers,
        default_origin,
    } = config;
    debug!("tiers: {:?}", tiers.names());
    debug!("chillers: {}", chillers.len());

    STATE
        .set(MarketState {
            estimator: CostEstimator::new(tiers),
            chillers,
            default_origin,
        })
        .map_err(|_| {
            warn!("Marketplace state already initialized; keeping current state");
            ConfigError::AlreadyInitialized("Marketplace state")
        })?;
    info!("Marketplace state ready");
    Ok(())
}

/// Checks if the state has been initialized or read.
pub fn is_initialized() -> bool {
    STATE.get().is_some()
}

fn state() -> &'static MarketState {
    STATE.get_or_init(MarketState::default)
}

pub fn estimator() -> &'static CostEstimator {
    &state().estimator
}

pub fn rate_table() -> &'static RateTable {
    estimator().rates()
}

pub fn chillers() -> &'static [ChillerListing] {
    &state().chillers
}

pub fn default_origin() -> GeoPoint {
    state().default_origin
}

/// Estimates a booking price against the configured rate table.
pub fn estimate(
    volume_litres: f64,
    duration_hours: f64,
    tier_name: &str,
) -> Result<CostBreakdown, UnknownTierError> {
    estimator().estimate(volume_litres, duration_hours, tier_name)
}

/// Ranks the configured chillers by distance from `origin`.
pub fn nearest_chillers(origin: &GeoPoint) -> Vec<Ranked<ChillerListing>> {
    rank_by_distance(origin, chillers())
}
