use super::*;

fn filled_form() -> ContestForm {
    ContestForm {
        title: "Algorithm Challenge #1".to_owned(),
        description: "Solve problems efficiently to earn points.".to_owned(),
        date: "2025-04-15".to_owned(),
        start_time: "18:00".to_owned(),
        duration: "2".to_owned(),
        contest_type: ContestType::WeeklyChallenge,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_type_is_weekly_challenge() {
    assert_eq!(ContestForm::default().contest_type, ContestType::WeeklyChallenge);
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn filled_form_validates() {
    assert!(filled_form().validate().is_ok());
}

#[test]
fn blank_title_fails_validation() {
    let mut form = filled_form();
    form.title = String::new();
    let err = form.validate().expect_err("blank title");
    assert_eq!(err.to_string(), "Contest Title is required");
}

#[test]
fn blank_date_fails_validation() {
    let mut form = filled_form();
    form.date = String::new();
    assert!(form.validate().is_err());
}

// =============================================================
// Duration rule
// =============================================================

#[test]
fn fractional_duration_is_accepted() {
    let mut form = filled_form();
    form.duration = "0.5".to_owned();
    assert!(form.validate().is_ok());
}

#[test]
fn non_numeric_duration_fails() {
    let mut form = filled_form();
    form.duration = "two".to_owned();
    let err = form.validate().expect_err("non-numeric duration");
    assert!(matches!(err, FormError::Validation(_)));
}

#[test]
fn zero_duration_fails() {
    let mut form = filled_form();
    form.duration = "0".to_owned();
    assert!(form.validate().is_err());
}

#[test]
fn negative_duration_fails() {
    let mut form = filled_form();
    form.duration = "-2".to_owned();
    assert!(form.validate().is_err());
}

// =============================================================
// Request body shape
// =============================================================

#[test]
fn serializes_camel_case_and_type_key() {
    let json = serde_json::to_value(filled_form()).expect("serialize");
    assert_eq!(json["startTime"], "18:00");
    assert_eq!(json["type"], "weekly-challenge");
}
