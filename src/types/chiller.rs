//! Struct definitions and implementations for objects that represent
//! chillers on the map.
//!
//! The most generic form of a chiller is [`ChillerLocation`]: an id and
//! a position. The directory shown to farmers uses [`ChillerListing`],
//! which extends a location with owner, capacity and rate data.
//!
//! Since Rust doesn't have a built-in way to represent an interface
//! type, we use an [`AsLocation`] trait to achieve the similar effect.
//! Distance ranking takes any `AsLocation` so it works on bare
//! locations and full listings alike.

use serde::{Deserialize, Serialize};

use super::location::GeoPoint;
use super::status::{ChillerKind, ChillerStatus};
use crate::rounding::round_cents;

/// Allows passing "location-like" objects to ranking functions.
pub trait AsLocation {
    /// Returns the generic `ChillerLocation` an object "extends".
    fn as_location(&self) -> &ChillerLocation;

    fn get_id(&self) -> String {
        self.as_location().id.clone()
    }
}

//------------------------------------------------------------------
// Structs and Implementations
//------------------------------------------------------------------

/// An entry in the fixed chiller reference list.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct ChillerLocation {
    pub id: String,

    /// Fixed position for stationary chillers, last known position for
    /// mobile units.
    pub coordinates: GeoPoint,
}

impl AsLocation for ChillerLocation {
    fn as_location(&self) -> &ChillerLocation {
        self
    }
}

/// A chiller as shown in the farmer's directory.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ChillerListing {
    pub location: ChillerLocation,
    pub name: String,
    pub owner: String,
    pub kind: ChillerKind,
    pub status: ChillerStatus,

    /// Advertised rate in currency units per litre.
    pub rate_per_litre: f64,

    pub capacity_litres: f64,

    /// Capacity not yet reserved by bookings.
    pub available_litres: f64,

    pub address: String,

    /// Status the chiller had before bookings filled it up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_before_full: Option<ChillerStatus>,
}

impl ChillerListing {
    /// Whether the listing can take `volume_litres` right now.
    pub fn can_accept(&self, volume_litres: f64) -> bool {
        self.status != ChillerStatus::Full && volume_litres <= self.available_litres
    }

    /// Takes `volume_litres` out of the free capacity, marking the
    /// chiller full when nothing is left.
    pub fn reserve(&mut self, volume_litres: f64) {
        self.available_litres = round_cents(self.available_litres - volume_litres);
        if self.available_litres <= 0.0 {
            self.available_litres = 0.0;
            if self.status != ChillerStatus::Full {
                self.status_before_full = Some(self.status);
                self.status = ChillerStatus::Full;
            }
        }
    }

    /// Returns `volume_litres` to the free capacity. A chiller that
    /// bookings had filled gets back the status it had before.
    pub fn release(&mut self, volume_litres: f64) {
        self.available_litres =
            round_cents((self.available_litres + volume_litres).min(self.capacity_litres));
        if self.status == ChillerStatus::Full && self.available_litres > 0.0 {
            self.status = self
                .status_before_full
                .take()
                .unwrap_or(ChillerStatus::Available);
        }
    }
}

impl AsLocation for ChillerListing {
    fn as_location(&self) -> &ChillerLocation {
        &self.location
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
