//! Reading state before initialization locks in the defaults; a later
//! initialization must fail without changing anything.

use chiller_market::config::MarketConfig;
use chiller_market::state;
use chiller_market::ConfigError;

#[test]
fn test_failed_init_keeps_defaults() {
    assert_eq!(state::chillers().len(), 5);
    assert!(state::is_initialized());

    let config = MarketConfig::from_json_str(
        r#"{
            "tiers": [{"name": "Bulk", "base_rate_per_litre": 0.5, "temperature_range_label": ""}],
            "chillers": [],
            "default_origin": {"latitude": 19.076, "longitude": 72.8777}
        }"#,
    )
    .unwrap();
    let result = state::init_from_config(config);
    assert!(matches!(result, Err(ConfigError::AlreadyInitialized(_))));

    assert_eq!(
        state::rate_table().names(),
        vec!["standard", "premium", "express"]
    );
    assert_eq!(state::chillers().len(), 5);
    assert_eq!(state::default_origin(), state::NEW_DELHI);
    assert_eq!(state::estimate(100.0, 8.0, "standard").unwrap().total, 110.0);
}
