//! Store aggregator and cross-slice orchestration.
//!
//! # Responsibility
//! - Own the composed application state and the storage adapter.
//! - Commit each slice's full state right after its transition applies.
//! - Mirror the whole aggregate to the write-only backup key after every
//!   public mutating operation.
//!
//! # Invariants
//! - The primary slice commits before any orchestrated secondary transition
//!   begins.
//! - The backup snapshot is written even when an operation settles as a
//!   failure.
//! - Slices never touch storage; all commits go through this module.

use crate::clock::Stamp;
use crate::model::{ProfilePatch, SignupRequest, User};
use crate::slice::auth::{self, AuthError, AuthIntent, AuthState};
use crate::slice::notifications::{self, NotificationsIntent, NotificationsState};
use crate::slice::profile::{self, ProfileIntent, ProfileState};
use crate::slice::tasks::{self, TaskError, TasksIntent, TasksState};
use crate::storage::{keys, StorageBackend, StoreAdapter};
use log::{info, warn};
use serde::Serialize;

/// Composed state tree across the four slices.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub auth: AuthState,
    pub profile: ProfileState,
    pub notifications: NotificationsState,
    pub tasks: TasksState,
}

/// Write-only aggregate mirror. Never read back by the application.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BackupSnapshot<'a> {
    last_update: &'a str,
    auth: &'a AuthState,
    profile: &'a ProfileState,
    notifications: &'a NotificationsState,
    tasks: &'a TasksState,
}

/// Process-wide state container. Explicitly constructed and injected into
/// consumers; there is no ambient global instance.
pub struct Store<B: StorageBackend> {
    adapter: StoreAdapter<B>,
    state: AppState,
}

impl<B: StorageBackend> Store<B> {
    /// Opens the store, reading each slice's initial state from the backend
    /// once. Absent or unreadable keys fall back to defaults.
    pub fn open(backend: B) -> Self {
        let adapter = StoreAdapter::new(backend);
        let state = AppState {
            auth: AuthState {
                user: adapter.auth(),
                error: None,
                loading: false,
            },
            profile: ProfileState {
                profile: adapter.profile().unwrap_or_default(),
            },
            notifications: NotificationsState {
                items: adapter.notifications(),
            },
            tasks: TasksState {
                tasks: adapter.tasks(),
            },
        };
        info!(
            "event=store_init module=store status=ok session={} tasks={} notifications={}",
            state.auth.user.is_some(),
            state.tasks.tasks.len(),
            state.notifications.items.len()
        );
        Self { adapter, state }
    }

    /// Read-only view of the composed state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    // --- auth -------------------------------------------------------------

    /// Runs the login phase machine to completion: pending, then a settled
    /// fulfilled or rejected state. On success the session is persisted
    /// before the profile side effect runs.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        auth::apply(&mut self.state.auth, AuthIntent::LoginPending);
        let users = self.adapter.users();
        let result = match auth::find_credentials(&users, email, password) {
            Some(found) => {
                let user = found.clone();
                self.adapter.set_auth(&user);
                auth::apply(&mut self.state.auth, AuthIntent::LoginFulfilled(user.clone()));
                self.apply_profile_update(ProfilePatch::from_user(&user));
                Ok(user)
            }
            None => {
                let err = AuthError::InvalidCredentials;
                warn!("event=login module=store status=rejected");
                auth::apply(&mut self.state.auth, AuthIntent::LoginRejected(err.to_string()));
                Err(err)
            }
        };
        self.write_backup();
        result
    }

    /// Registers a new account. The registry is persisted before the session
    /// key, and the session before the profile side effect.
    pub fn signup(&mut self, request: &SignupRequest) -> Result<User, AuthError> {
        auth::apply(&mut self.state.auth, AuthIntent::SignupPending);
        let mut users = self.adapter.users();
        let result = if auth::email_taken(&users, &request.email) {
            let err = AuthError::DuplicateEmail;
            warn!("event=signup module=store status=rejected");
            auth::apply(&mut self.state.auth, AuthIntent::SignupRejected(err.to_string()));
            Err(err)
        } else {
            let user = User::from_signup(request);
            users.push(user.clone());
            self.adapter.set_users(&users);
            self.adapter.set_auth(&user);
            auth::apply(&mut self.state.auth, AuthIntent::SignupFulfilled(user.clone()));
            self.apply_profile_update(ProfilePatch::from_user(&user));
            Ok(user)
        };
        self.write_backup();
        result
    }

    /// Clears the session and resets the profile. Both storage keys are
    /// removed entirely, not reset to defaults.
    pub fn logout(&mut self) {
        self.adapter.remove_auth();
        auth::apply(&mut self.state.auth, AuthIntent::LogoutFulfilled);
        profile::apply(&mut self.state.profile, ProfileIntent::Reset);
        self.adapter.remove_profile();
        self.write_backup();
    }

    /// Drops the inline auth error, as the next form attempt does.
    pub fn clear_auth_error(&mut self) {
        auth::apply(&mut self.state.auth, AuthIntent::ClearError);
        self.write_backup();
    }

    // --- profile ----------------------------------------------------------

    /// Profile-edit flow: shallow-merge, persist, then announce the update.
    pub fn update_profile(&mut self, patch: ProfilePatch) {
        self.apply_profile_update(patch);
        self.push_notification("Profile updated successfully".to_string());
        self.write_backup();
    }

    /// Restores the default profile and removes its persisted key.
    pub fn reset_profile(&mut self) {
        profile::apply(&mut self.state.profile, ProfileIntent::Reset);
        self.adapter.remove_profile();
        self.write_backup();
    }

    /// Re-reads the persisted profile, overwriting in-memory state when a
    /// stored value exists.
    pub fn load_profile(&mut self) {
        let stored = self.adapter.profile();
        profile::apply(&mut self.state.profile, ProfileIntent::Load(stored));
        self.write_backup();
    }

    fn apply_profile_update(&mut self, patch: ProfilePatch) {
        profile::apply(&mut self.state.profile, ProfileIntent::Update(patch));
        self.adapter.set_profile(&self.state.profile.profile);
    }

    // --- tasks ------------------------------------------------------------

    /// Appends a task and announces it on the notification feed.
    pub fn add_task(&mut self, text: impl Into<String>) -> Result<(), TaskError> {
        let text = text.into();
        let result = self.apply_tasks_commit(TasksIntent::Add {
            text: text.clone(),
            stamp: Stamp::now(),
        });
        if result.is_ok() {
            self.push_notification(format!("New task added: {text}"));
        }
        self.write_backup();
        result
    }

    /// Flips one task's completed flag. Announces "Task completed" for both
    /// directions; un-completing a task still posts the same text.
    pub fn toggle_task(&mut self, id: i64) -> Result<(), TaskError> {
        let text = self
            .state
            .tasks
            .tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.text.clone());
        let result = self.apply_tasks_commit(TasksIntent::Toggle(id));
        if let Some(text) = text {
            self.push_notification(format!("Task completed: {text}"));
        }
        self.write_backup();
        result
    }

    /// Removes one task and announces the removal. An absent id is a no-op
    /// with no notification.
    pub fn remove_task(&mut self, id: i64) -> Result<(), TaskError> {
        let text = self
            .state
            .tasks
            .tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.text.clone());
        let result = self.apply_tasks_commit(TasksIntent::Remove(id));
        if let Some(text) = text {
            self.push_notification(format!("Task removed: {text}"));
        }
        self.write_backup();
        result
    }

    /// Drag-and-drop reorder with post-removal destination indexing. A bad
    /// index fails with `IndexOutOfRange` and leaves the board untouched.
    pub fn reorder_tasks(
        &mut self,
        source_index: usize,
        destination_index: usize,
    ) -> Result<(), TaskError> {
        let result = self.apply_tasks_commit(TasksIntent::Reorder {
            source_index,
            destination_index,
        });
        self.write_backup();
        result
    }

    /// Re-reads the persisted task list into memory.
    pub fn load_tasks(&mut self) {
        let stored = self.adapter.tasks();
        // Load never fails; only Reorder carries an error path.
        let _ = tasks::apply(&mut self.state.tasks, TasksIntent::Load(stored));
        self.write_backup();
    }

    fn apply_tasks_commit(&mut self, intent: TasksIntent) -> Result<(), TaskError> {
        let result = tasks::apply(&mut self.state.tasks, intent);
        if result.is_ok() {
            self.adapter.set_tasks(&self.state.tasks.tasks);
        }
        result
    }

    // --- notifications ----------------------------------------------------

    /// Flips one notification's read flag. An absent id is a no-op.
    pub fn toggle_notification_read(&mut self, id: i64) {
        notifications::apply(
            &mut self.state.notifications,
            NotificationsIntent::ToggleRead(id),
        );
        self.adapter.set_notifications(&self.state.notifications.items);
        self.write_backup();
    }

    /// Empties the notification feed.
    pub fn clear_notifications(&mut self) {
        notifications::apply(&mut self.state.notifications, NotificationsIntent::ClearAll);
        self.adapter.set_notifications(&self.state.notifications.items);
        self.write_backup();
    }

    /// Re-reads the persisted notification list into memory.
    pub fn load_notifications(&mut self) {
        let stored = self.adapter.notifications();
        notifications::apply(&mut self.state.notifications, NotificationsIntent::Load(stored));
        self.write_backup();
    }

    fn push_notification(&mut self, text: String) {
        notifications::apply(
            &mut self.state.notifications,
            NotificationsIntent::Add {
                text,
                stamp: Stamp::now(),
            },
        );
        self.adapter.set_notifications(&self.state.notifications.items);
    }

    // --- backup mirror ----------------------------------------------------

    fn write_backup(&mut self) {
        let stamp = Stamp::now();
        let snapshot = BackupSnapshot {
            last_update: &stamp.rfc3339,
            auth: &self.state.auth,
            profile: &self.state.profile,
            notifications: &self.state.notifications,
            tasks: &self.state.tasks,
        };
        self.adapter.set(keys::BACKUP, &snapshot);
    }
}
