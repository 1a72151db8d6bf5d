//! Profile entity and its shallow-merge patch.
//!
//! # Responsibility
//! - Define the editable profile mirror of the session user.
//! - Provide field-wise shallow-merge semantics for profile updates.
//!
//! # Invariants
//! - The profile is an independent copy; it may diverge from the registry
//!   record it was seeded from.
//! - A patch field that is present always overwrites, including overwriting
//!   with null for the nullable fields.

use crate::model::user::User;
use serde::{Deserialize, Serialize};

/// Editable profile, persisted wholesale under its own storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Defaults to an empty string; becomes null when merged from an account
    /// record that carries no age. The stored schema allows both.
    pub age: Option<String>,
    pub picture: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            age: Some(String::new()),
            picture: None,
        }
    }
}

/// Shallow-merge patch for [`Profile`].
///
/// Outer `None` means "leave the current value". For the nullable fields the
/// inner option carries the new value, so `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub id: Option<Option<String>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<Option<String>>,
    pub picture: Option<Option<String>>,
}

impl ProfilePatch {
    /// Patch covering every shared field of an account record, applied by the
    /// auth flow after login and signup.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(Some(user.id.clone())),
            first_name: Some(user.first_name.clone()),
            last_name: Some(user.last_name.clone()),
            email: Some(user.email.clone()),
            age: Some(user.age.clone()),
            picture: Some(user.picture.clone()),
        }
    }

    /// Applies the patch onto `profile`, field by field.
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(id) = &self.id {
            profile.id = id.clone();
        }
        if let Some(first_name) = &self.first_name {
            profile.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            profile.last_name = last_name.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
        if let Some(age) = &self.age {
            profile.age = age.clone();
        }
        if let Some(picture) = &self.picture {
            profile.picture = picture.clone();
        }
    }
}
