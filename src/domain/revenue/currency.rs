//! Display rounding for currency amounts.

/// Rounds to whole cents, half away from zero.
///
/// Only applied when presenting amounts; engine arithmetic stays unrounded.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
