//! Error types for every fallible operation in the crate.
//!
//! Distance ranking has no error type: bad coordinates produce a
//! defined but meaningless distance instead.

use thiserror::Error;
use uuid::Uuid;

/// Raised when a tier name is not in the rate table. Tier names are a
/// closed set chosen by the caller, so this is a programming error and
/// is never retried.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown tier `{requested}`; valid tiers: {}", .valid.join(", "))]
pub struct UnknownTierError {
    pub requested: String,
    pub valid: Vec<String>,
}

/// Configuration could not be loaded or applied.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} already initialized")]
    AlreadyInitialized(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure kinds reported by a platform location API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Timed out acquiring position")]
    Timeout,

    #[error("Unknown location error: {0}")]
    Unknown(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Wallet already exists: {0}")]
    WalletExists(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("Insufficient funds in wallet {wallet_id}: balance {balance:.2}, requested {requested:.2}")]
    InsufficientFunds {
        wallet_id: String,
        balance: f64,
        requested: f64,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Volume must be a positive number of litres, got {0}")]
    InvalidVolume(f64),

    #[error("Duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),

    #[error("Chiller not found: {0}")]
    UnknownChiller(String),

    #[error("Chiller {chiller_id} cannot take {requested}L ({available}L available)")]
    InsufficientCapacity {
        chiller_id: String,
        available: f64,
        requested: f64,
    },

    #[error("Booking not found: {0}")]
    UnknownBooking(Uuid),

    #[error("Booking already cancelled: {0}")]
    AlreadyCancelled(Uuid),

    #[error(transparent)]
    Pricing(#[from] UnknownTierError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
