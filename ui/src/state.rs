use payloads::responses;
use yewdux::prelude::*;

/// Result of the session lookup against the identity backend.
#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    /// The lookup hasn't resolved yet.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserProfile),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Managed by `use_authentication` and the login form.
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}
