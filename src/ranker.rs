//! Orders chillers by great-circle distance from a reference point.

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::chiller::AsLocation;
use crate::haversine;
use crate::location::GeoPoint;

/// A chiller annotated with its distance from the ranking origin.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Ranked<T> {
    pub chiller: T,
    pub distance_km: f64,
}

impl<T> Ranked<T> {
    /// Display form of the distance, e.g. `"1.7 km"`.
    pub fn display_distance(&self) -> String {
        format_distance_km(self.distance_km)
    }
}

/// Formats a distance with one decimal place and a `" km"` suffix.
pub fn format_distance_km(distance_km: f64) -> String {
    format!("{:.1} km", distance_km)
}

/// Ranks `chillers` by distance from `origin`, nearest first.
///
/// The sort is stable: chillers at equal distance keep their input
/// order. The input slice is left untouched and a new ordered copy is
/// returned, so repeated calls with the same inputs give the same
/// result.
///
/// # Time Complexity
/// *O*(*n* log *n*).
pub fn rank_by_distance<T>(origin: &GeoPoint, chillers: &[T]) -> Vec<Ranked<T>>
where
    T: AsLocation + Clone,
{
    let mut ranked: Vec<Ranked<T>> = chillers
        .iter()
        .map(|chiller| Ranked {
            distance_km: haversine::distance(origin, &chiller.as_location().coordinates),
            chiller: chiller.clone(),
        })
        .collect();
    ranked.sort_by_key(|entry| OrderedFloat(entry.distance_km));
    debug!("ranked {} chillers from {:?}", ranked.len(), origin);
    ranked
}

#[cfg(test)]
mod ranker_tests {
    use super::*;
    use crate::chiller::ChillerLocation;
    use crate::generator::generate_chillers_near;

    const NEW_DELHI: GeoPoint = GeoPoint::new(28.6139, 77.2090);

    fn chiller(id: &str, latitude: f64, longitude: f64) -> ChillerLocation {
        ChillerLocation {
            id: id.to_string(),
            coordinates: GeoPoint::new(latitude, longitude),
        }
    }

    fn reference() -> Vec<ChillerLocation> {
        vec![
            chiller("2", 28.6289, 77.2065),
            chiller("3", 28.5989, 77.2295),
            chiller("1", 28.6139, 77.2090),
            chiller("5", 28.5839, 77.2190),
            chiller("4", 28.6339, 77.1910),
        ]
    }

    #[test]
    fn test_origin_chiller_ranks_first() {
        let ranked = rank_by_distance(&NEW_DELHI, &reference());
        assert_eq!(ranked[0].chiller.id, "1");
        assert_eq!(ranked[0].distance_km, 0.0);
        assert_eq!(ranked[0].display_distance(), "0.0 km");
    }

    #[test]
    fn test_sorted_ascending() {
        let ranked = rank_by_distance(&NEW_DELHI, &reference());
        let ids: Vec<&str> = ranked.iter().map(|r| r.chiller.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].distance_km <= pair[1].distance_km));
    }

    #[test]
    fn test_idempotent_and_input_untouched() {
        let chillers = reference();
        let before = chillers.clone();
        let first = rank_by_distance(&NEW_DELHI, &chillers);
        let second = rank_by_distance(&NEW_DELHI, &chillers);
        assert_eq!(first, second);
        assert_eq!(chillers, before);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let chillers = vec![
            chiller("b", 28.7, 77.2090),
            chiller("a", 28.7, 77.2090),
            chiller("c", 28.6139, 77.2090),
        ];
        let ranked = rank_by_distance(&NEW_DELHI, &chillers);
        let ids: Vec<&str> = ranked.iter().map(|r| r.chiller.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_empty_input() {
        let ranked = rank_by_distance::<ChillerLocation>(&NEW_DELHI, &[]);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_random_chillers_sorted() {
        let chillers = generate_chillers_near(&NEW_DELHI, 25.0, 200);
        let ranked = rank_by_distance(&NEW_DELHI, &chillers);
        assert_eq!(ranked.len(), 200);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].distance_km <= pair[1].distance_km));
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance_km(1.24), "1.2 km");
        assert_eq!(format_distance_km(3.77), "3.8 km");
        assert_eq!(format_distance_km(12.0), "12.0 km");
    }
}
