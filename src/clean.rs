//! Removal of physically implausible consumption readings.

use crate::Readings;

/// Keep the readings whose consumption is present and strictly between zero and
/// [crate::Kwh::PLAUSIBLE_MAX]. Anything else is a measurement error and is dropped, never
/// corrected.
pub fn clean(readings: Readings) -> Readings {
    let before = readings.len();
    let cleaned = readings.retain(|reading| reading.consumption.is_some_and(|c| c.is_plausible()));
    tracing::debug!(
        kept = cleaned.len(),
        discarded = before - cleaned.len(),
        "cleaned consumption readings"
    );
    cleaned
}
