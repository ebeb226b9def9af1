//! Booking price estimation.
//!
//! A price is the tier's base rate times the volume, prorated for
//! cooling windows longer than 8 hours, then reduced by at most one
//! volume discount. The platform fee and the total are rounded to whole
//! currency units independently of each other, so `total` may differ
//! from `subtotal + platform_fee` by one unit. Callers that need to
//! detect that can use [`CostBreakdown::reconciles`].

use serde::{Deserialize, Serialize};

use crate::error::UnknownTierError;
use crate::rate::RateTable;
use crate::rounding::{round_cents, round_whole};

/// Reference cooling window in hours. Shorter bookings pay for the full
/// window.
pub const REFERENCE_DURATION_HOURS: f64 = 8.0;

/// Share of the subtotal kept by the platform.
pub const PLATFORM_FEE_RATE: f64 = 0.1;

/// Volume above which the bulk discount applies.
pub const BULK_THRESHOLD_LITRES: f64 = 500.0;
pub const BULK_DISCOUNT_FACTOR: f64 = 0.85;

/// Volume above which the medium discount applies.
pub const MEDIUM_THRESHOLD_LITRES: f64 = 200.0;
pub const MEDIUM_DISCOUNT_FACTOR: f64 = 0.9;

/// Computed price of a booking.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Rounded to cents.
    pub subtotal: f64,

    /// `round(subtotal * 0.1)`, whole units.
    pub platform_fee: f64,

    /// `round(subtotal * 1.1)`, whole units.
    pub total: f64,
}

impl CostBreakdown {
    /// Whether `total` equals `subtotal + platform_fee` exactly.
    pub fn reconciles(&self) -> bool {
        round_cents(self.subtotal + self.platform_fee) == self.total
    }

    /// Whether `volume_litres` earns a volume discount.
    pub fn discount_applied(volume_litres: f64) -> bool {
        volume_litres > MEDIUM_THRESHOLD_LITRES
    }
}

/// Turns raw booking parameters into a [`CostBreakdown`] using a rate
/// table.
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    rates: RateTable,
}

impl CostEstimator {
    pub fn new(rates: RateTable) -> CostEstimator {
        CostEstimator { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Estimates the price of cooling `volume_litres` for
    /// `duration_hours` at tier `tier_name`.
    ///
    /// Non-positive volume yields an all-zero breakdown; blocking such
    /// bookings is the caller's job. Durations at or below 8 hours are
    /// charged as 8 hours. Non-finite volume counts as zero and
    /// non-finite duration as 8 hours.
    ///
    /// # Errors
    /// [`UnknownTierError`] if `tier_name` is not in the table.
    pub fn estimate(
        &self,
        volume_litres: f64,
        duration_hours: f64,
        tier_name: &str,
    ) -> Result<CostBreakdown, UnknownTierError> {
        let tier = self.rates.find(tier_name)?;
        let volume = if volume_litres.is_finite() {
            volume_litres
        } else {
            0.0
        };
        let duration = if duration_hours.is_finite() {
            duration_hours
        } else {
            REFERENCE_DURATION_HOURS
        };

        let mut raw = if volume > 0.0 {
            tier.base_rate_per_litre * volume
        } else {
            0.0
        };
        if duration > REFERENCE_DURATION_HOURS {
            raw *= duration / REFERENCE_DURATION_HOURS;
        }
        if volume > BULK_THRESHOLD_LITRES {
            raw *= BULK_DISCOUNT_FACTOR;
        } else if volume > MEDIUM_THRESHOLD_LITRES {
            raw *= MEDIUM_DISCOUNT_FACTOR;
        }

        let subtotal = round_cents(raw);
        let breakdown = CostBreakdown {
            subtotal,
            platform_fee: round_whole(subtotal * PLATFORM_FEE_RATE),
            total: round_whole(subtotal * (1.0 + PLATFORM_FEE_RATE)),
        };
        debug!(
            "estimate tier={} volume={} duration={}: {:?}",
            tier.name, volume, duration, breakdown
        );
        Ok(breakdown)
    }
}
