//! Notifications slice: the bell panel feed.
//!
//! # Responsibility
//! - Own the notification list and its read flags.
//!
//! # Invariants
//! - Ids are unique even when two creates land in the same millisecond.
//! - Storage order is append order; the panel sorts by timestamp descending
//!   at read time.

use crate::clock::Stamp;
use crate::model::Notification;
use serde::Serialize;

/// Notifications slice state. Serialized as-is into the backup snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    /// Panel view: newest first.
    pub fn sorted_by_newest(&self) -> Vec<&Notification> {
        let mut items: Vec<&Notification> = self.items.iter().collect();
        // RFC 3339 strings compare chronologically.
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.read).count()
    }
}

/// Tagged intents for the notifications slice.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationsIntent {
    Add { text: String, stamp: Stamp },
    ToggleRead(i64),
    ClearAll,
    /// Carries the adapter's read result so the transition stays pure.
    Load(Vec<Notification>),
}

/// Applies one intent to the notification feed.
pub fn apply(state: &mut NotificationsState, intent: NotificationsIntent) {
    match intent {
        NotificationsIntent::Add { text, stamp } => {
            let item = Notification {
                id: next_id(&state.items, stamp.epoch_ms),
                text,
                read: false,
                timestamp: stamp.rfc3339,
            };
            state.items.push(item);
        }
        NotificationsIntent::ToggleRead(id) => {
            if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                item.read = !item.read;
            }
        }
        NotificationsIntent::ClearAll => state.items.clear(),
        NotificationsIntent::Load(stored) => state.items = stored,
    }
}

fn next_id(items: &[Notification], epoch_ms: i64) -> i64 {
    match items.iter().map(|item| item.id).max() {
        Some(last) if epoch_ms <= last => last + 1,
        _ => epoch_ms,
    }
}
