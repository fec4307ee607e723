use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_starts_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn anonymous_is_not_admin() {
    assert!(!AuthState::default().is_admin());
}

#[test]
fn admin_role_is_detected() {
    let state = AuthState {
        user: Some(User {
            id: "u-1".to_owned(),
            name: "Admin User".to_owned(),
            email: "admin@example.com".to_owned(),
            role: Role::Admin,
        }),
        loading: false,
    };
    assert!(state.is_admin());
}
