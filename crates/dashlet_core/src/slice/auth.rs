//! Auth slice: session lifecycle and the login/signup phase machine.
//!
//! # Responsibility
//! - Own the session user, inline error text, and loading flag.
//! - Model login/signup as pending -> fulfilled/rejected intent sequences.
//!
//! # Invariants
//! - At most one session user at a time.
//! - A new pending phase always clears the previous error.

use crate::model::User;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Auth slice state. Serialized as-is into the backup snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub error: Option<String>,
    pub loading: bool,
}

/// Errors settled by the login and signup flows. Display text is the inline
/// message shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No registry record matches the supplied email/password pair.
    InvalidCredentials,
    /// Signup email already present in the registry. The comparison is exact
    /// and case-sensitive.
    DuplicateEmail,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid email or password"),
            Self::DuplicateEmail => write!(f, "Email already exists"),
        }
    }
}

impl Error for AuthError {}

/// Tagged intents for the auth slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthIntent {
    LoginPending,
    LoginFulfilled(User),
    LoginRejected(String),
    SignupPending,
    SignupFulfilled(User),
    SignupRejected(String),
    LogoutFulfilled,
    ClearError,
}

/// Applies one intent to the auth state. Pure; persistence is the store's job.
pub fn apply(state: &mut AuthState, intent: AuthIntent) {
    match intent {
        AuthIntent::LoginPending | AuthIntent::SignupPending => {
            state.loading = true;
            state.error = None;
        }
        AuthIntent::LoginFulfilled(user) | AuthIntent::SignupFulfilled(user) => {
            state.user = Some(user);
            state.loading = false;
            state.error = None;
        }
        AuthIntent::LoginRejected(message) | AuthIntent::SignupRejected(message) => {
            state.loading = false;
            state.error = Some(message);
        }
        AuthIntent::LogoutFulfilled => {
            state.user = None;
            state.error = None;
            state.loading = false;
        }
        AuthIntent::ClearError => {
            state.error = None;
        }
    }
}

/// Scans the registry for an exact email and password match.
pub fn find_credentials<'a>(users: &'a [User], email: &str, password: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|user| user.email == email && user.password == password)
}

/// Case-sensitive duplicate-email check used by signup.
pub fn email_taken(users: &[User], email: &str) -> bool {
    users.iter().any(|user| user.email == email)
}

#[cfg(test)]
mod tests {
    use super::{apply, email_taken, find_credentials, AuthIntent, AuthState};
    use crate::model::User;

    fn user(email: &str, password: &str) -> User {
        User {
            id: "u-1".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            age: None,
            picture: None,
        }
    }

    #[test]
    fn pending_sets_loading_and_clears_error() {
        let mut state = AuthState {
            error: Some("Invalid email or password".to_string()),
            ..AuthState::default()
        };
        apply(&mut state, AuthIntent::LoginPending);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn fulfilled_sets_session_and_settles() {
        let mut state = AuthState::default();
        apply(&mut state, AuthIntent::LoginPending);
        apply(&mut state, AuthIntent::LoginFulfilled(user("a@b.com", "pw")));
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
    }

    #[test]
    fn rejected_keeps_session_unset_and_stores_message() {
        let mut state = AuthState::default();
        apply(&mut state, AuthIntent::LoginPending);
        apply(
            &mut state,
            AuthIntent::LoginRejected("Invalid email or password".to_string()),
        );
        assert!(!state.loading);
        assert_eq!(state.user, None);
        assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
    }

    #[test]
    fn logout_clears_everything() {
        let mut state = AuthState {
            user: Some(user("a@b.com", "pw")),
            error: Some("stale".to_string()),
            loading: true,
        };
        apply(&mut state, AuthIntent::LogoutFulfilled);
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn credential_scan_requires_both_fields() {
        let users = vec![user("a@b.com", "pw")];
        assert!(find_credentials(&users, "a@b.com", "pw").is_some());
        assert!(find_credentials(&users, "a@b.com", "other").is_none());
        assert!(find_credentials(&users, "x@b.com", "pw").is_none());
    }

    #[test]
    fn email_check_is_case_sensitive() {
        let users = vec![user("a@b.com", "pw")];
        assert!(email_taken(&users, "a@b.com"));
        assert!(!email_taken(&users, "A@B.com"));
    }
}
