//! Final submission of a booking draft.
//!
//! There is no backend: the draft is written to the console log for
//! observability and a reference is handed back for the confirmation page.
//! A short simulated latency keeps the pending state honest.

use gloo_timers::future::TimeoutFuture;
use rand::RngCore;

use crate::config::SUBMIT_DELAY_MS;
use crate::types::BookingDraft;

/// Generate a display reference for a submitted booking, e.g. `BK-9F31A04C`.
pub fn booking_reference() -> String {
    let mut bytes = [0u8; 4];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("BK-{}", hex::encode_upper(bytes))
}

/// Submit the draft: log it, wait out the simulated latency, return the
/// booking reference. The caller redirects to the confirmation page.
pub async fn submit_booking(draft: &BookingDraft) -> String {
    let reference = booking_reference();
    let timestamp = js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .as_string()
        .unwrap_or_else(|| "00:00:00".to_string());

    match serde_json::to_string_pretty(draft) {
        Ok(json) => log::info!("📦 [{}] Booking {} submitted:\n{}", timestamp, reference, json),
        Err(e) => log::warn!("Could not serialize booking draft: {}", e),
    }

    TimeoutFuture::new(SUBMIT_DELAY_MS).await;

    reference
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_format() {
        let reference = booking_reference();
        assert_eq!(reference.len(), 11);
        assert!(reference.starts_with("BK-"));
        assert!(reference[3..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_references_vary() {
        let a = booking_reference();
        let b = booking_reference();
        // 32 random bits; a collision here means the RNG is broken
        assert_ne!(a, b);
    }
}
