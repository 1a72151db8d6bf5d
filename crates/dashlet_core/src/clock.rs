//! Wall-clock capture for slice transitions.
//!
//! # Responsibility
//! - Produce one capture of "now" in both shapes transitions need.
//! - Keep transitions pure: they receive a `Stamp`, they never read the clock.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// One captured instant: epoch milliseconds plus its RFC 3339 rendering.
///
/// Id derivation uses `epoch_ms`; persisted `timestamp`/`createdAt` fields use
/// `rfc3339`. Both come from the same reading so the two never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub epoch_ms: i64,
    pub rfc3339: String,
}

impl Stamp {
    /// Captures the current UTC instant.
    pub fn now() -> Self {
        let instant = OffsetDateTime::now_utc();
        let epoch_ms = (instant.unix_timestamp_nanos() / 1_000_000) as i64;
        // Formatting a valid UTC instant only fails for unrepresentable years;
        // keep a stamp-shaped fallback instead of panicking.
        let rfc3339 = instant
            .format(&Rfc3339)
            .unwrap_or_else(|_| format!("@{epoch_ms}"));
        Self { epoch_ms, rfc3339 }
    }

    /// Builds a fixed stamp, mainly for deterministic tests.
    pub fn fixed(epoch_ms: i64, rfc3339: impl Into<String>) -> Self {
        Self {
            epoch_ms,
            rfc3339: rfc3339.into(),
        }
    }
}
