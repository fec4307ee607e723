#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::types::Role;
use crate::state::submission::{FormError, require};

/// Expected admin verification code. Overridable at build time; the default
/// matches the code the signup email flow currently hands out. Client-side
/// checking is a stand-in until out-of-band verification lands server-side.
const EXPECTED_ADMIN_CODE: &str = match option_env!("ADMIN_SIGNUP_CODE") {
    Some(code) => code,
    None => "123456",
};

/// Signup form fields. Serializes to the `/api/auth/signup` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub admin_code: String,
}

impl SignupForm {
    /// Validate before the account-creation call: required fields, and the
    /// verification code when signing up as an admin.
    pub fn validate(&self) -> Result<(), FormError> {
        require("Full name", &self.name)?;
        require("Email", &self.email)?;
        require("Password", &self.password)?;

        if self.role == Role::Admin {
            require("Admin verification code", &self.admin_code)?;
            if self.admin_code != EXPECTED_ADMIN_CODE {
                return Err(FormError::Validation("Invalid admin code".to_owned()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) const fn expected_admin_code() -> &'static str {
    EXPECTED_ADMIN_CODE
}
