//! Fail-soft typed adapter over the raw key-value backend.
//!
//! # Responsibility
//! - Serialize and deserialize whole JSON documents per storage key.
//! - Never surface storage errors to callers: log once and fall back.
//!
//! # Invariants
//! - `get` returns the caller's default on an absent key or bad persisted
//!   JSON; it never raises.
//! - `set` writes the full value, never a delta; failures are logged and
//!   swallowed without retry.

use super::{keys, StorageBackend};
use crate::model::{Notification, Profile, Task, User};
use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed storage surface used by the store for commits and initial reads.
pub struct StoreAdapter<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> StoreAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Reads and deserializes one key, falling back to `default` on absence
    /// or any failure.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.read(key) {
            Ok(raw) => raw,
            Err(err) => {
                error!("event=storage_read module=storage status=error key={key} error={err}");
                return default;
            }
        };
        match raw {
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(err) => {
                    error!(
                        "event=storage_parse module=storage status=error key={key} error={err}"
                    );
                    default
                }
            },
            None => default,
        }
    }

    /// Serializes and writes one key's full value.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(err) => {
                error!("event=storage_serialize module=storage status=error key={key} error={err}");
                return;
            }
        };
        if let Err(err) = self.backend.write(key, &text) {
            error!("event=storage_write module=storage status=error key={key} error={err}");
        }
    }

    /// Deletes one key. Absent keys are not an error.
    pub fn remove(&mut self, key: &str) {
        if let Err(err) = self.backend.delete(key) {
            error!("event=storage_remove module=storage status=error key={key} error={err}");
        }
    }

    // Typed helpers, one pair per storage key.

    pub fn auth(&self) -> Option<User> {
        self.get(keys::AUTH, None)
    }

    pub fn set_auth(&mut self, user: &User) {
        self.set(keys::AUTH, user);
    }

    pub fn remove_auth(&mut self) {
        self.remove(keys::AUTH);
    }

    pub fn profile(&self) -> Option<Profile> {
        self.get(keys::PROFILE, None)
    }

    pub fn set_profile(&mut self, profile: &Profile) {
        self.set(keys::PROFILE, profile);
    }

    pub fn remove_profile(&mut self) {
        self.remove(keys::PROFILE);
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.get(keys::TASKS, Vec::new())
    }

    pub fn set_tasks(&mut self, tasks: &[Task]) {
        self.set(keys::TASKS, &tasks);
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.get(keys::NOTIFICATIONS, Vec::new())
    }

    pub fn set_notifications(&mut self, items: &[Notification]) {
        self.set(keys::NOTIFICATIONS, &items);
    }

    pub fn users(&self) -> Vec<User> {
        self.get(keys::USERS, Vec::new())
    }

    pub fn set_users(&mut self, users: &[User]) {
        self.set(keys::USERS, &users);
    }
}
