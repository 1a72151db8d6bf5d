//! Notification panel entry.

use serde::{Deserialize, Serialize};

/// One notification. Stored unordered; the panel sorts by `timestamp`
/// descending at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Timestamp-derived id in epoch milliseconds, bumped on collision.
    pub id: i64,
    pub text: String,
    pub read: bool,
    /// RFC 3339 creation instant.
    pub timestamp: String,
}
