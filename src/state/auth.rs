#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Session state: the signed-in user, if any, and whether the initial
/// `/api/auth/me` lookup is still pending. Provided as an `RwSignal`
/// context from the app root.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // Loading until the session lookup resolves, so guarded pages do
        // not redirect before the user is known.
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }
}
