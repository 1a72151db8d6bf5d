//! Task board entry.

use serde::{Deserialize, Serialize};

/// One task line on the board. Array order is display order; drag-and-drop
/// reordering moves entries within the persisted array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Creation-ordered id derived from the creation instant in epoch
    /// milliseconds, bumped when two creates land in the same millisecond.
    pub id: i64,
    pub text: String,
    pub completed: bool,
    /// RFC 3339 creation instant.
    pub created_at: String,
}
