//! Great-circle distance between two [`GeoPoint`]s.

use crate::location::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the haversine distance between two points in kilometers.
///
/// Out-of-range coordinates are not rejected; the result is whatever
/// the formula yields for them.
pub fn distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lat = (to.lat() - from.lat()).to_radians();
    let d_lon = (to.lon() - from.lon()).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat().to_radians().cos() * to.lat().to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
