use super::*;

// =============================================================
// Status transitions
// =============================================================

#[test]
fn status_defaults_to_idle() {
    let status = SubmissionStatus::default();
    assert_eq!(status, SubmissionStatus::Idle);
    assert!(!status.is_loading());
    assert!(status.error().is_none());
}

#[test]
fn begin_moves_idle_to_loading() {
    let mut status = SubmissionStatus::Idle;
    assert!(status.begin());
    assert!(status.is_loading());
}

#[test]
fn begin_refuses_reentry_while_loading() {
    let mut status = SubmissionStatus::Loading;
    assert!(!status.begin());
    assert!(status.is_loading());
}

#[test]
fn succeed_moves_loading_to_success() {
    let mut status = SubmissionStatus::Loading;
    status.succeed();
    assert!(status.is_success());
}

#[test]
fn fail_records_the_message() {
    let mut status = SubmissionStatus::Loading;
    status.fail("Failed to create contest");
    assert_eq!(status.error(), Some("Failed to create contest"));
    assert!(!status.is_loading());
}

#[test]
fn resubmit_after_error_clears_the_message() {
    let mut status = SubmissionStatus::Error("boom".to_owned());
    assert!(status.begin());
    assert!(status.is_loading());
    assert!(status.error().is_none());
}

// =============================================================
// FormError display
// =============================================================

#[test]
fn form_error_displays_bare_message() {
    let err = FormError::Validation("Invalid admin code".to_owned());
    assert_eq!(err.to_string(), "Invalid admin code");

    let err = FormError::Operation("server exploded".to_owned());
    assert_eq!(err.to_string(), "server exploded");
}

#[test]
fn require_rejects_blank_and_whitespace() {
    assert!(require("Email", "").is_err());
    assert!(require("Email", "   ").is_err());
    assert!(require("Email", "a@b.c").is_ok());
}

#[test]
fn require_names_the_field_in_the_message() {
    let err = require("Contest Title", "").expect_err("blank field");
    assert_eq!(err.to_string(), "Contest Title is required");
}
