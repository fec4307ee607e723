#[cfg(test)]
#[path = "join_test.rs"]
mod join_test;

use crate::state::submission::FormError;

/// Minimum accepted registration ID length. Placeholder rule used by the
/// simulated join endpoint; the real backend will decide acceptance itself.
pub const MIN_REGISTRATION_ID_LEN: usize = 5;

/// Join form: the registration ID handed out when the user registered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinForm {
    pub registration_id: String,
}

impl JoinForm {
    /// Validate before the join call is made.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.registration_id.trim().is_empty() {
            return Err(FormError::Validation(
                "Please enter your registration ID".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Acceptance rule applied by the simulated join endpoint after its latency
/// delay. Stands in for the backend's registration lookup.
pub fn check_registration_id(registration_id: &str) -> Result<(), FormError> {
    if registration_id.chars().count() < MIN_REGISTRATION_ID_LEN {
        return Err(FormError::Operation(
            "Invalid registration ID or you are not registered for this contest.".to_owned(),
        ));
    }
    Ok(())
}
