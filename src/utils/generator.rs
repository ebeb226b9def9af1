//! Generates random chillers around a point, for tests and demos.

use rand::Rng;
use uuid::Uuid;

use crate::chiller::ChillerLocation;
use crate::location::GeoPoint;

/// Kilometers per degree of latitude.
const KM_PER_DEGREE: f64 = 111.32;

/// Generates `capacity` chillers within roughly `radius_km` of
/// `location`.
///
/// Points are sampled uniformly in a lat/lon box, so corners may sit a
/// little outside the radius. Ids are random UUIDs.
pub fn generate_chillers_near(
    location: &GeoPoint,
    radius_km: f64,
    capacity: usize,
) -> Vec<ChillerLocation> {
    let mut rng = rand::thread_rng();
    let lat_span = radius_km / KM_PER_DEGREE;
    let lon_span = radius_km / (KM_PER_DEGREE * location.lat().to_radians().cos().max(0.01));
    (0..capacity)
        .map(|_| ChillerLocation {
            id: Uuid::new_v4().to_string(),
            coordinates: GeoPoint::new(
                (location.lat() + rng.gen_range(-lat_span..=lat_span)).clamp(-90.0, 90.0),
                (location.lon() + rng.gen_range(-lon_span..=lon_span)).clamp(-180.0, 180.0),
            ),
        })
        .collect()
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::haversine;

    #[test]
    fn test_generates_requested_count_nearby() {
        let origin = GeoPoint::new(28.6139, 77.2090);
        let chillers = generate_chillers_near(&origin, 10.0, 50);
        assert_eq!(chillers.len(), 50);
        for chiller in &chillers {
            assert!(chiller.coordinates.is_valid());
            // box corners are at most sqrt(2) * radius away
            assert!(haversine::distance(&origin, &chiller.coordinates) <= 15.0);
        }
    }
}
