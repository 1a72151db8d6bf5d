//! Profile slice: the editable mirror of the session user.
//!
//! # Responsibility
//! - Own the profile copy seeded from login/signup and edited by the user.
//!
//! # Invariants
//! - `Update` is a shallow merge; absent patch fields keep current values.
//! - `Reset` restores the hardcoded default profile.
//! - `Load` only overwrites in-memory state when a persisted value exists.

use crate::model::{Profile, ProfilePatch};
use serde::Serialize;

/// Profile slice state. Serialized as-is into the backup snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileState {
    pub profile: Profile,
}

/// Tagged intents for the profile slice.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileIntent {
    Update(ProfilePatch),
    Reset,
    /// Carries the adapter's read result so the transition stays pure.
    Load(Option<Profile>),
}

/// Applies one intent to the profile state.
pub fn apply(state: &mut ProfileState, intent: ProfileIntent) {
    match intent {
        ProfileIntent::Update(patch) => patch.apply_to(&mut state.profile),
        ProfileIntent::Reset => state.profile = Profile::default(),
        ProfileIntent::Load(stored) => {
            if let Some(profile) = stored {
                state.profile = profile;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, ProfileIntent, ProfileState};
    use crate::model::{Profile, ProfilePatch};

    #[test]
    fn update_merges_into_current_profile() {
        let mut state = ProfileState::default();
        let patch = ProfilePatch {
            first_name: Some("Ada".to_string()),
            email: Some("ada@b.com".to_string()),
            ..ProfilePatch::default()
        };
        apply(&mut state, ProfileIntent::Update(patch));
        assert_eq!(state.profile.first_name, "Ada");
        assert_eq!(state.profile.email, "ada@b.com");
        // Untouched fields keep their defaults.
        assert_eq!(state.profile.age.as_deref(), Some(""));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = ProfileState {
            profile: Profile {
                first_name: "Ada".to_string(),
                ..Profile::default()
            },
        };
        apply(&mut state, ProfileIntent::Reset);
        assert_eq!(state.profile, Profile::default());
    }

    #[test]
    fn load_without_stored_value_is_a_no_op() {
        let mut state = ProfileState {
            profile: Profile {
                first_name: "Ada".to_string(),
                ..Profile::default()
            },
        };
        apply(&mut state, ProfileIntent::Load(None));
        assert_eq!(state.profile.first_name, "Ada");
    }

    #[test]
    fn load_overwrites_with_stored_value() {
        let mut state = ProfileState::default();
        let stored = Profile {
            first_name: "Grace".to_string(),
            ..Profile::default()
        };
        apply(&mut state, ProfileIntent::Load(Some(stored.clone())));
        assert_eq!(state.profile, stored);
    }
}
