//! Struct definitions and implementations for [`GeoPoint`].
//!
//! A `GeoPoint` is either the user's current position or the fixed
//! (or last known) position of a chiller.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`GeoPoint`] is an interface type that represents the geographic
/// position of an object. Typically, this type is used in tandem with
/// the [`ChillerLocation`](`super::chiller::ChillerLocation`) type.
///
/// Values are stored as [`OrderedFloat`] so points can be hashed and
/// compared, which lets listings keyed by position live in maps.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    /// The latitude in degrees, expected in `[-90, 90]`.
    pub latitude: OrderedFloat<f64>,

    /// The longitude in degrees, expected in `[-180, 180]`.
    pub longitude: OrderedFloat<f64>,
}

impl GeoPoint {
    /// Creates a point from raw degrees. No range check is done here;
    /// see [`GeoPoint::is_valid`].
    pub const fn new(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Returns the latitude as a plain float.
    pub fn lat(&self) -> f64 {
        self.latitude.into_inner()
    }

    /// Returns the longitude as a plain float.
    pub fn lon(&self) -> f64 {
        self.longitude.into_inner()
    }

    /// Whether both coordinates are finite and inside their ranges.
    ///
    /// Distance computations never call this; it exists for callers
    /// that validate user input before ranking.
    pub fn is_valid(&self) -> bool {
        let (lat, lon) = (self.lat(), self.lon());
        lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_valid_ranges() {
        assert!(GeoPoint::new(28.6139, 77.2090).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.1).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_deserialize_plain_numbers() {
        let point: GeoPoint =
            serde_json::from_str(r#"{"latitude": 28.5989, "longitude": 77.2295}"#).unwrap();
        assert_eq!(point, GeoPoint::new(28.5989, 77.2295));
    }
}
