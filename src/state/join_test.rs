use super::*;

// =============================================================
// Pre-call validation
// =============================================================

#[test]
fn empty_registration_id_fails_before_the_call() {
    let form = JoinForm::default();
    let err = form.validate().expect_err("empty id");
    assert_eq!(
        err,
        FormError::Validation("Please enter your registration ID".to_owned())
    );
}

#[test]
fn whitespace_registration_id_fails() {
    let form = JoinForm {
        registration_id: "   ".to_owned(),
    };
    assert!(form.validate().is_err());
}

#[test]
fn non_empty_registration_id_passes_validation() {
    let form = JoinForm {
        registration_id: "abcd".to_owned(),
    };
    // Length is the endpoint's business, not the form's.
    assert!(form.validate().is_ok());
}

// =============================================================
// Endpoint acceptance rule
// =============================================================

#[test]
fn short_registration_id_is_rejected_with_the_exact_message() {
    let err = check_registration_id("abcd").expect_err("four characters");
    assert_eq!(
        err,
        FormError::Operation(
            "Invalid registration ID or you are not registered for this contest.".to_owned()
        )
    );
}

#[test]
fn five_character_registration_id_is_accepted() {
    assert!(check_registration_id("abcde").is_ok());
}

#[test]
fn long_registration_id_is_accepted() {
    assert!(check_registration_id("abcde12345").is_ok());
}
