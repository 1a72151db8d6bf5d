use dashlet_core::storage::{keys, StorageBackend};
use dashlet_core::{
    open_store, open_store_in_memory, AuthError, Profile, SignupRequest, Store, StoreAdapter,
};

fn signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        password: "12345678".to_string(),
        first_name: "A".to_string(),
        last_name: "B".to_string(),
    }
}

#[test]
fn signup_registers_user_sets_session_and_seeds_profile() {
    let mut store = Store::open(open_store_in_memory().unwrap());

    let user = store.signup(&signup_request("a@b.com")).unwrap();

    let state = store.state();
    assert_eq!(state.auth.user.as_ref(), Some(&user));
    assert_eq!(state.auth.error, None);
    assert!(!state.auth.loading);

    assert_eq!(state.profile.profile.first_name, "A");
    assert_eq!(state.profile.profile.last_name, "B");
    assert_eq!(state.profile.profile.email, "a@b.com");
    assert_eq!(state.profile.profile.id, Some(user.id.clone()));
    // The account record carries no age yet, so the merge clears the default.
    assert_eq!(state.profile.profile.age, None);
}

#[test]
fn signup_with_duplicate_email_fails_and_keeps_registry_unchanged() {
    let mut store = Store::open(open_store_in_memory().unwrap());

    store.signup(&signup_request("a@b.com")).unwrap();
    let err = store.signup(&signup_request("a@b.com")).unwrap_err();
    assert_eq!(err, AuthError::DuplicateEmail);

    let state = store.state();
    assert_eq!(state.auth.error.as_deref(), Some("Email already exists"));
    assert!(!state.auth.loading);
    // The first session survives a rejected second signup.
    assert_eq!(
        state.auth.user.as_ref().map(|u| u.email.as_str()),
        Some("a@b.com")
    );
}

#[test]
fn duplicate_email_check_is_case_sensitive() {
    let mut store = Store::open(open_store_in_memory().unwrap());

    store.signup(&signup_request("a@b.com")).unwrap();
    // Exact-match policy: a different casing registers as a new account.
    store.signup(&signup_request("A@b.com")).unwrap();
}

#[test]
fn login_with_unknown_credentials_settles_rejected() {
    let mut store = Store::open(open_store_in_memory().unwrap());

    let err = store.login("ghost@b.com", "pw").unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);

    let state = store.state();
    assert_eq!(state.auth.user, None);
    assert_eq!(
        state.auth.error.as_deref(),
        Some("Invalid email or password")
    );
    assert!(!state.auth.loading);
}

#[test]
fn login_requires_exact_password_match() {
    let mut store = Store::open(open_store_in_memory().unwrap());
    store.signup(&signup_request("a@b.com")).unwrap();
    store.logout();

    let err = store.login("a@b.com", "wrong").unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);

    let user = store.login("a@b.com", "12345678").unwrap();
    assert_eq!(user.email, "a@b.com");
    // A settled success clears the earlier inline error.
    assert_eq!(store.state().auth.error, None);
}

#[test]
fn clear_auth_error_drops_the_inline_message() {
    let mut store = Store::open(open_store_in_memory().unwrap());
    store.login("ghost@b.com", "pw").unwrap_err();
    assert!(store.state().auth.error.is_some());

    store.clear_auth_error();
    assert_eq!(store.state().auth.error, None);
}

#[test]
fn logout_resets_profile_and_removes_both_storage_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashlet.db");

    {
        let mut store = Store::open(open_store(&path).unwrap());
        store.signup(&signup_request("a@b.com")).unwrap();
        store.logout();

        let state = store.state();
        assert_eq!(state.auth.user, None);
        assert_eq!(state.profile.profile, Profile::default());
    }

    let backend = open_store(&path).unwrap();
    assert_eq!(backend.read(keys::AUTH).unwrap(), None);
    assert_eq!(backend.read(keys::PROFILE).unwrap(), None);
    // The registry itself survives logout.
    let adapter = StoreAdapter::new(backend);
    assert_eq!(adapter.users().len(), 1);
}

#[test]
fn reset_profile_restores_defaults_and_removes_the_key() {
    let mut store = Store::open(open_store_in_memory().unwrap());
    store.signup(&signup_request("a@b.com")).unwrap();
    assert_eq!(store.state().profile.profile.email, "a@b.com");

    store.reset_profile();
    assert_eq!(store.state().profile.profile, Profile::default());

    // The persisted key is gone, so a reload keeps the defaults.
    store.load_profile();
    assert_eq!(store.state().profile.profile, Profile::default());
}

#[test]
fn session_and_profile_are_restored_on_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashlet.db");

    let user = {
        let mut store = Store::open(open_store(&path).unwrap());
        store.signup(&signup_request("a@b.com")).unwrap()
    };

    let store = Store::open(open_store(&path).unwrap());
    let state = store.state();
    assert_eq!(state.auth.user.as_ref(), Some(&user));
    assert_eq!(state.profile.profile.email, "a@b.com");
}
