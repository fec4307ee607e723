use super::*;

// =============================================================
// Contest type wire values
// =============================================================

#[test]
fn contest_type_as_str_matches_wire_values() {
    assert_eq!(ContestType::WeeklyChallenge.as_str(), "weekly-challenge");
    assert_eq!(ContestType::AlgorithmSprint.as_str(), "algorithm-sprint");
    assert_eq!(ContestType::CodeMastersCup.as_str(), "code-masters-cup");
}

#[test]
fn contest_type_parse_accepts_wire_values() {
    assert_eq!(ContestType::parse("algorithm-sprint"), Some(ContestType::AlgorithmSprint));
    assert_eq!(ContestType::parse("weekly-challenge"), Some(ContestType::WeeklyChallenge));
}

#[test]
fn contest_type_parse_rejects_unknown_value() {
    assert_eq!(ContestType::parse("hackathon"), None);
    assert_eq!(ContestType::parse(""), None);
}

#[test]
fn contest_type_serializes_kebab_case() {
    let json = serde_json::to_value(ContestType::CodeMastersCup).expect("serialize");
    assert_eq!(json, serde_json::json!("code-masters-cup"));
}

// =============================================================
// Contest serialization
// =============================================================

#[test]
fn contest_uses_camel_case_and_renamed_type_key() {
    let contest = Contest {
        id: "c-1".to_owned(),
        title: "Algorithm Sprint #2".to_owned(),
        description: "Timed challenges".to_owned(),
        date: "2025-04-15".to_owned(),
        start_time: "18:00".to_owned(),
        duration: "2".to_owned(),
        contest_type: ContestType::AlgorithmSprint,
        status: ContestStatus::Active,
    };

    let json = serde_json::to_value(&contest).expect("serialize");
    assert_eq!(json["startTime"], "18:00");
    assert_eq!(json["type"], "algorithm-sprint");
    assert_eq!(json["status"], "active");
}

#[test]
fn contest_status_labels() {
    assert_eq!(ContestStatus::Upcoming.label(), "Upcoming");
    assert_eq!(ContestStatus::Active.label(), "Live");
}

// =============================================================
// User and role
// =============================================================

#[test]
fn user_role_defaults_to_user_when_absent() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Alice",
        "email": "alice@example.com"
    }))
    .expect("deserialize");
    assert_eq!(user.role, Role::User);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Admin).expect("serialize"), serde_json::json!("admin"));
}
