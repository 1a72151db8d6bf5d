//! Persisted entity shapes for the dashboard domain.
//!
//! # Responsibility
//! - Define the JSON-stable structures each slice owns.
//!
//! # Invariants
//! - Serialized field names are camelCase and must keep parsing data written
//!   by earlier versions; shape changes are breaking.
//! - Each entity type is owned by exactly one slice.

pub mod notification;
pub mod profile;
pub mod task;
pub mod user;

pub use notification::Notification;
pub use profile::{Profile, ProfilePatch};
pub use task::Task;
pub use user::{SignupRequest, User};
