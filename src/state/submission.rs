#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

/// UI status of one form submission.
///
/// Pages hold this in an `RwSignal` and drive it through `begin`, `succeed`,
/// and `fail`. At most one call is in flight per form: `begin` refuses
/// re-entry while `Loading`, and the submit control is disabled for the
/// duration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl SubmissionStatus {
    /// Enter `Loading`. Returns `false` (and leaves the status unchanged)
    /// if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Loading) {
            return false;
        }
        *self = Self::Loading;
        true
    }

    pub fn succeed(&mut self) {
        *self = Self::Success;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Error(message.into());
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The displayable error message, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Why a submission could not complete.
///
/// `Validation` errors are raised before any network call; `Operation`
/// errors come back from the backend. Pages reduce both to a single
/// displayable string, so no structured codes leak into the UI.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Operation(String),
}

/// Check that a required field is non-empty after trimming.
pub fn require(label: &str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Validation(format!("{label} is required")));
    }
    Ok(())
}
