//! Process-wide state is write-once, so each scenario lives in its own
//! test binary.

use chiller_market::config::MarketConfig;
use chiller_market::geolocation::resolve_origin;
use chiller_market::location::GeoPoint;
use chiller_market::state::{self, NEW_DELHI};
use chiller_market::{ConfigError, LocationError};

#[test]
fn test_state_lifecycle() {
    let config = MarketConfig::from_json_str(
        r#"{"tiers": [
            {"name": "Standard", "base_rate_per_litre": 1.0, "temperature_range_label": "-2°C to 0°C"},
            {"name": "Bulk", "base_rate_per_litre": 0.5, "temperature_range_label": "-2°C to 0°C"}
        ]}"#,
    )
    .unwrap();
    state::init_from_config(config).unwrap();
    assert!(state::is_initialized());

    assert_eq!(state::rate_table().names(), vec!["standard", "bulk"]);
    assert_eq!(state::estimate(100.0, 8.0, "bulk").unwrap().subtotal, 50.0);
    assert!(state::estimate(100.0, 8.0, "premium").is_err());
    assert_eq!(state::default_origin(), NEW_DELHI);
    let no_fix = || -> Result<GeoPoint, LocationError> { Err(LocationError::Timeout) };
    assert_eq!(resolve_origin(&no_fix), NEW_DELHI);

    let ranked = state::nearest_chillers(&NEW_DELHI);
    assert_eq!(ranked.len(), 5);
    assert_eq!(ranked[0].chiller.location.id, "1");

    let again = state::init_from_config(MarketConfig::default());
    assert!(matches!(again, Err(ConfigError::AlreadyInitialized(_))));
    assert_eq!(state::rate_table().names(), vec!["standard", "bulk"]);
}
