//! Core state and persistence engine for the dashlet dashboard.
//! This crate is the single source of truth for slice transitions and storage.

pub mod clock;
pub mod logging;
pub mod model;
pub mod slice;
pub mod storage;
pub mod store;

pub use clock::Stamp;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{Notification, Profile, ProfilePatch, SignupRequest, Task, User};
pub use slice::auth::{AuthError, AuthState};
pub use slice::notifications::NotificationsState;
pub use slice::profile::ProfileState;
pub use slice::tasks::{TaskError, TasksState};
pub use storage::{
    open_store, open_store_in_memory, SqliteBackend, StorageBackend, StorageError, StoreAdapter,
};
pub use store::{AppState, Store};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
