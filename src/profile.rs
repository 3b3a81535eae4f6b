use crate::cancel::CancelToken;
use crate::models::UserProfile;

/// What the profile card shows. The simulated source cannot fail, so there is
/// no error state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    #[default]
    Loading,
    Ready(UserProfile),
}

impl ProfileState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileState::Loading)
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            ProfileState::Ready(profile) => Some(profile),
            ProfileState::Loading => None,
        }
    }

    /// Populate the profile once the delay has elapsed. Returns `false` and
    /// leaves the state alone when the owning component was torn down.
    pub fn resolve(&mut self, token: &CancelToken, profile: UserProfile) -> bool {
        if token.is_cancelled() {
            return false;
        }
        *self = ProfileState::Ready(profile);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading_without_profile() {
        let state = ProfileState::default();
        assert!(state.is_loading());
        assert!(state.profile().is_none());
    }

    #[test]
    fn test_resolve_populates_fixture_exactly() {
        let fixture = UserProfile::demo();
        let token = CancelToken::detached();
        let mut state = ProfileState::default();

        assert!(state.resolve(&token, fixture.clone()));
        assert!(!state.is_loading());
        assert_eq!(state.profile(), Some(&fixture));
    }

    #[test]
    fn test_fallback_avatar_only_when_fixture_lacks_one() {
        let token = CancelToken::detached();

        let mut without = ProfileState::default();
        without.resolve(&token, UserProfile { avatar_url: None, ..UserProfile::demo() });
        assert_eq!(without.profile().unwrap().avatar_src("/fallback.svg"), "/fallback.svg");

        let mut with = ProfileState::default();
        with.resolve(
            &token,
            UserProfile { avatar_url: Some("/me.png".to_string()), ..UserProfile::demo() },
        );
        assert_eq!(with.profile().unwrap().avatar_src("/fallback.svg"), "/me.png");
    }

    #[test]
    fn test_resolve_after_teardown_is_ignored() {
        let token = CancelToken::detached();
        let mut state = ProfileState::default();
        token.cancel();

        assert!(!state.resolve(&token, UserProfile::demo()));
        assert_eq!(state, ProfileState::Loading);
    }
}
