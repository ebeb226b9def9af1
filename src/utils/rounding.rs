//! Rounding helpers for money values.

/// Rounds half-up to a whole currency unit, i.e. `floor(x + 0.5)`.
///
/// Halves round toward positive infinity, so `-2.5` becomes `-2`.
pub fn round_whole(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod rounding_tests {
    use super::*;

    #[test]
    fn test_round_whole_half_up() {
        assert_eq!(round_whole(4.5), 5.0);
        assert_eq!(round_whole(0.45), 0.0);
        assert_eq!(round_whole(-2.5), -2.0);
        assert_eq!(round_whole(297.00000000000006), 297.0);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(12.344), 12.34);
        assert_eq!(round_cents(12.346), 12.35);
        assert_eq!(round_cents(0.0), 0.0);
    }
}
