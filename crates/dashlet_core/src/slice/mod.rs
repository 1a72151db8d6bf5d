//! Domain slices: pure state transitions per entity type.
//!
//! # Responsibility
//! - Define one state struct, one tagged intent enum, and one exhaustive
//!   `apply` function per slice.
//!
//! # Invariants
//! - Transitions never touch storage; the store commits the slice's full
//!   state after each applied intent.
//! - Transitions are deterministic given the state, intent, and stamp.

pub mod auth;
pub mod notifications;
pub mod profile;
pub mod tasks;
