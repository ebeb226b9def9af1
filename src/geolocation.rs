//! Acquiring the user's position, with a fixed fallback.
//!
//! Platform location APIs can fail with permission, availability,
//! timeout or unknown errors. Ranking never waits on them: any failure
//! resolves to the configured default origin.

use crate::error::LocationError;
use crate::location::GeoPoint;
use crate::state;

/// Source of the user's current position.
pub trait LocationProvider {
    fn current_position(&self) -> Result<GeoPoint, LocationError>;
}

/// A provider that always reports the same point. Useful when the user
/// typed an address or for tests.
#[derive(Debug, Copy, Clone)]
pub struct FixedLocation(pub GeoPoint);

impl LocationProvider for FixedLocation {
    fn current_position(&self) -> Result<GeoPoint, LocationError> {
        Ok(self.0)
    }
}

impl<F> LocationProvider for F
where
    F: Fn() -> Result<GeoPoint, LocationError>,
{
    fn current_position(&self) -> Result<GeoPoint, LocationError> {
        self()
    }
}

/// Returns the provider's position, or [`state::default_origin`] if
/// the provider fails.
pub fn resolve_origin(provider: &dyn LocationProvider) -> GeoPoint {
    resolve_origin_or(provider, state::default_origin())
}

/// Same as [`resolve_origin`] with an explicit fallback point.
pub fn resolve_origin_or(provider: &dyn LocationProvider, fallback: GeoPoint) -> GeoPoint {
    match provider.current_position() {
        Ok(point) => {
            debug!("current position: {:?}", point);
            point
        }
        Err(e) => {
            warn!("{}; falling back to {:?}", e, fallback);
            fallback
        }
    }
}
