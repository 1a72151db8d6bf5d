//! Key-value persistence for dashboard state.
//!
//! # Responsibility
//! - Own the namespaced storage keys and their JSON value shapes.
//! - Bootstrap the SQLite key-value backend and its schema migrations.
//! - Expose the fail-soft adapter the store commits through after every
//!   transition.
//!
//! # Invariants
//! - Each slice owns a disjoint set of keys; no module reads another slice's
//!   key directly.
//! - Values are always full-state JSON documents, never deltas.
//! - There is no atomicity across keys; each write commits independently.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod adapter;
pub mod backend;
pub mod migrations;

pub use adapter::StoreAdapter;
pub use backend::{open_store, open_store_in_memory, SqliteBackend, StorageBackend};

/// Namespaced storage keys. One slice per key, plus the write-only backup.
pub mod keys {
    pub const AUTH: &str = "dashlet_auth";
    pub const PROFILE: &str = "dashlet_profile";
    pub const TASKS: &str = "dashlet_tasks";
    pub const NOTIFICATIONS: &str = "dashlet_notifications";
    pub const USERS: &str = "dashlet_users";
    pub const BACKUP: &str = "dashlet_store_backup";
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Backend and serialization failures.
///
/// Only the `open_*` functions surface these to callers; inside the adapter
/// they are logged and swallowed.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    Serde(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Serde(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
