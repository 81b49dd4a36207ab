//! Price estimation for a shipment.
//!
//! A flat base fee plus linear weight and volume charges. This is marketing
//! ballpark pricing, not a rating engine.

use crate::config::{BASE_PRICE, VOLUME_RATE, WEIGHT_RATE};

/// Parse a user-entered amount; empty or non-numeric input counts as 0.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Estimated price in USD for the given cargo, rounded to 2 decimals.
///
/// `price = 50 + weight × 0.5 + volume × 0.2`
pub fn estimate_price(weight_kg: f64, volume_m3: f64) -> f64 {
    let raw = BASE_PRICE + weight_kg * WEIGHT_RATE + volume_m3 * VOLUME_RATE;
    (raw * 100.0).round() / 100.0
}
