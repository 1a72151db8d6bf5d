//! User registry records and signup input.
//!
//! # Responsibility
//! - Define the persisted account record shared by the registry and the
//!   session key.
//!
//! # Invariants
//! - `id` is assigned once at signup and never changes afterwards.
//! - `email` is unique across the registry (enforced by the signup flow).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account, stored both in the user registry and, while logged
/// in, under the session key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable account id, assigned at signup.
    pub id: String,
    pub email: String,
    /// Stored as-is; credential hashing is out of scope for the local store.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Free-form age text from the profile form. `None` until the user sets it.
    pub age: Option<String>,
    /// Data-URI avatar. `None` until the user uploads one.
    pub picture: Option<String>,
}

/// Input collected by the signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Builds a registry record from signup input with a fresh stable id.
    pub fn from_signup(request: &SignupRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: request.email.clone(),
            password: request.password.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            age: None,
            picture: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SignupRequest, User};

    fn request() -> SignupRequest {
        SignupRequest {
            email: "a@b.com".to_string(),
            password: "12345678".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        }
    }

    #[test]
    fn from_signup_assigns_unique_ids() {
        let first = User::from_signup(&request());
        let second = User::from_signup(&request());
        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(first.age, None);
        assert_eq!(first.picture, None);
    }

    #[test]
    fn serialized_field_names_are_camel_case() {
        let user = User::from_signup(&request());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("lastName").is_some());
        assert!(json.get("first_name").is_none());
    }
}
