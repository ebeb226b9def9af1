//! Milk-Chilling Marketplace Library.
//! Prices chiller bookings, ranks chillers by distance and keeps
//! farmers' wallets and bookings.

#[macro_use]
extern crate log;

/// Types used throughout the library.
pub mod types {
    pub mod booking;
    pub mod chiller;
    pub mod location;
    pub mod rate;
    pub mod status;
    pub mod transaction;
}

/// Helper functions.
pub mod utils {
    pub mod generator;
    pub mod haversine;
    pub mod rounding;
}

/// Services owning mutable marketplace data.
pub mod services {
    pub mod booking;
    pub mod ledger;
}

pub mod config;
pub mod directory;
pub mod error;
pub mod estimator;
pub mod geolocation;
pub mod ranker;
pub mod state;

pub use types::*;
pub use utils::*;

pub use error::{BookingError, ConfigError, LedgerError, LocationError, UnknownTierError};
pub use estimator::{CostBreakdown, CostEstimator};
pub use ranker::{format_distance_km, rank_by_distance, Ranked};
pub use services::booking::BookingService;
pub use services::ledger::LedgerService;
