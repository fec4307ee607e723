use super::*;

fn filled_form() -> SignupForm {
    SignupForm {
        name: "John Doe".to_owned(),
        email: "john@example.com".to_owned(),
        password: "hunter22".to_owned(),
        role: Role::User,
        admin_code: String::new(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_role_is_user() {
    let form = SignupForm::default();
    assert_eq!(form.role, Role::User);
    assert!(form.admin_code.is_empty());
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn filled_user_form_validates() {
    assert!(filled_form().validate().is_ok());
}

#[test]
fn blank_name_fails_validation() {
    let mut form = filled_form();
    form.name = "  ".to_owned();
    let err = form.validate().expect_err("blank name");
    assert_eq!(err, FormError::Validation("Full name is required".to_owned()));
}

#[test]
fn blank_email_fails_validation() {
    let mut form = filled_form();
    form.email = String::new();
    assert!(form.validate().is_err());
}

#[test]
fn blank_password_fails_validation() {
    let mut form = filled_form();
    form.password = String::new();
    assert!(form.validate().is_err());
}

// =============================================================
// Admin verification code
// =============================================================

#[test]
fn user_role_ignores_admin_code() {
    let mut form = filled_form();
    form.admin_code = "000000".to_owned();
    assert!(form.validate().is_ok());
}

#[test]
fn admin_role_requires_a_code() {
    let mut form = filled_form();
    form.role = Role::Admin;
    let err = form.validate().expect_err("missing code");
    assert!(matches!(err, FormError::Validation(_)));
}

#[test]
fn admin_role_rejects_wrong_code() {
    let mut form = filled_form();
    form.role = Role::Admin;
    form.admin_code = "654321".to_owned();
    let err = form.validate().expect_err("wrong code");
    assert_eq!(err, FormError::Validation("Invalid admin code".to_owned()));
}

#[test]
fn admin_role_accepts_expected_code() {
    let mut form = filled_form();
    form.role = Role::Admin;
    form.admin_code = expected_admin_code().to_owned();
    assert!(form.validate().is_ok());
}

// =============================================================
// Request body shape
// =============================================================

#[test]
fn serializes_camel_case_admin_code() {
    let mut form = filled_form();
    form.role = Role::Admin;
    form.admin_code = "123456".to_owned();

    let json = serde_json::to_value(&form).expect("serialize");
    assert_eq!(json["adminCode"], "123456");
    assert_eq!(json["role"], "admin");
    assert_eq!(json["name"], "John Doe");
}
