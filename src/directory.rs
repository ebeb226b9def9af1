//! The chiller directory shown on the farmer's map: the reference list,
//! free-text search and quick filters.

use serde::{Deserialize, Serialize};

use crate::chiller::{ChillerListing, ChillerLocation};
use crate::haversine;
use crate::location::GeoPoint;
use crate::ranker::{rank_by_distance, Ranked};
use crate::status::{ChillerKind, ChillerStatus};

/// Radius of the "nearby" filter.
pub const NEARBY_RADIUS_KM: f64 = 3.0;

/// Quick filters offered above the chiller list.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum ChillerFilter {
    All,
    Available,
    Mobile,
    /// Within [`NEARBY_RADIUS_KM`] of the origin.
    Nearby,
}

impl ChillerFilter {
    pub const ALL: [ChillerFilter; 4] = [
        ChillerFilter::All,
        ChillerFilter::Available,
        ChillerFilter::Mobile,
        ChillerFilter::Nearby,
    ];

    fn matches(&self, listing: &ChillerListing, origin: &GeoPoint) -> bool {
        match self {
            ChillerFilter::All => true,
            ChillerFilter::Available => listing.status == ChillerStatus::Available,
            ChillerFilter::Mobile => listing.kind == ChillerKind::Mobile,
            ChillerFilter::Nearby => {
                haversine::distance(origin, &listing.location.coordinates) <= NEARBY_RADIUS_KM
            }
        }
    }
}

fn matches_query(listing: &ChillerListing, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || [&listing.name, &listing.owner, &listing.address]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
}

/// Listings whose name, owner or address contains `query` (ignoring
/// case) and that pass `filter`, nearest first. An empty query matches
/// everything.
pub fn search(
    listings: &[ChillerListing],
    origin: &GeoPoint,
    query: &str,
    filter: ChillerFilter,
) -> Vec<Ranked<ChillerListing>> {
    let matching: Vec<ChillerListing> = listings
        .iter()
        .filter(|listing| matches_query(listing, query) && filter.matches(listing, origin))
        .cloned()
        .collect();
    rank_by_distance(origin, &matching)
}

/// Number of listings passing each filter, in [`ChillerFilter::ALL`]
/// order.
pub fn filter_counts(listings: &[ChillerListing], origin: &GeoPoint) -> Vec<(ChillerFilter, usize)> {
    ChillerFilter::ALL
        .iter()
        .map(|filter| {
            let count = listings
                .iter()
                .filter(|listing| filter.matches(listing, origin))
                .count();
            (*filter, count)
        })
        .collect()
}

/// Mean advertised rate per litre.
pub fn average_rate(listings: &[ChillerListing]) -> Option<f64> {
    if listings.is_empty() {
        return None;
    }
    let sum: f64 = listings.iter().map(|listing| listing.rate_per_litre).sum();
    Some(sum / listings.len() as f64)
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    owner: &str,
    kind: ChillerKind,
    status: ChillerStatus,
    coordinates: GeoPoint,
    rate_per_litre: f64,
    capacity_litres: f64,
    available_litres: f64,
    address: &str,
) -> ChillerListing {
    ChillerListing {
        location: ChillerLocation {
            id: id.to_string(),
            coordinates,
        },
        name: name.to_string(),
        owner: owner.to_string(),
        kind,
        status,
        rate_per_litre,
        capacity_litres,
        available_litres,
        address: address.to_string(),
        status_before_full: None,
    }
}

/// The built-in chiller list around New Delhi.
pub fn reference_chillers() -> Vec<ChillerListing> {
    vec![
        listing(
            "1",
            "Village Community Chiller",
            "Ramesh Kumar",
            ChillerKind::Fixed,
            ChillerStatus::Available,
            GeoPoint::new(28.6139, 77.2090),
            1.2,
            500.0,
            350.0,
            "Village Road, Sector 12",
        ),
        listing(
            "2",
            "Mobile Chiller Express",
            "CoolTruck Services",
            ChillerKind::Mobile,
            ChillerStatus::EnRoute,
            GeoPoint::new(28.6289, 77.2065),
            1.5,
            200.0,
            200.0,
            "Mobile Unit - Current Location",
        ),
        listing(
            "3",
            "Cooperative Dairy Chiller",
            "Milk Cooperative",
            ChillerKind::Fixed,
            ChillerStatus::Limited,
            GeoPoint::new(28.5989, 77.2295),
            1.0,
            800.0,
            120.0,
            "Cooperative Society, Main Market",
        ),
        listing(
            "4",
            "Premium Cold Storage",
            "FreshKeep Solutions",
            ChillerKind::Fixed,
            ChillerStatus::Available,
            GeoPoint::new(28.6339, 77.1910),
            2.0,
            1000.0,
            750.0,
            "Industrial Area, Phase 2",
        ),
        listing(
            "5",
            "Quick Chill Station",
            "Rajesh Patel",
            ChillerKind::Fixed,
            ChillerStatus::Full,
            GeoPoint::new(28.5839, 77.2190),
            1.3,
            300.0,
            0.0,
            "Highway Junction, Near Petrol Pump",
        ),
    ]
}
