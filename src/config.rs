//! Application configuration.
//!
//! Centralized configuration for the FreightFlow frontend.
//! These are hardcoded for the marketing site. In production they could be
//! loaded from environment or a config file.

/// Application name.
///
/// Shown in the navbar brand and page titles.
pub const APP_NAME: &str = "FreightFlow";

/// Flat base fee applied to every shipment (in USD).
pub const BASE_PRICE: f64 = 50.0;

/// Price per kilogram of cargo weight.
pub const WEIGHT_RATE: f64 = 0.5;

/// Price per cubic meter of cargo volume.
pub const VOLUME_RATE: f64 = 0.2;

/// Smallest accepted cargo weight (kg) and volume (m³).
pub const MIN_CARGO_AMOUNT: f64 = 0.1;

/// Default temperature setting for a new draft, normalized to [0, 1].
pub const DEFAULT_TEMPERATURE: f64 = 0.4;

/// Route the controller navigates to after a successful submit.
pub const CONFIRMATION_PATH: &str = "/thank-you";

/// Simulated submission latency (milliseconds).
///
/// There is no backend; the delay keeps the pending state visible.
pub const SUBMIT_DELAY_MS: u32 = 600;
