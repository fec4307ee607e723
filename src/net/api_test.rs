use super::*;

// =============================================================
// Error body reduction
// =============================================================

#[test]
fn message_from_body_prefers_message_then_error() {
    let body = serde_json::json!({"message": "m1", "error": "m2"});
    assert_eq!(message_from_body(&body), Some("m1".to_owned()));

    let body = serde_json::json!({"error": "m2"});
    assert_eq!(message_from_body(&body), Some("m2".to_owned()));
}

#[test]
fn message_from_body_skips_blank_entries() {
    let body = serde_json::json!({"message": "   ", "error": "m2"});
    assert_eq!(message_from_body(&body), Some("m2".to_owned()));
}

#[test]
fn message_from_body_handles_missing_keys() {
    assert_eq!(message_from_body(&serde_json::json!({})), None);
    assert_eq!(message_from_body(&serde_json::json!({"message": 42})), None);
}

// =============================================================
// Placeholder contest data
// =============================================================

#[test]
fn mock_contest_carries_the_requested_status() {
    let contest = mock_contest("abc123", ContestStatus::Active);
    assert_eq!(contest.id, "abc123");
    assert_eq!(contest.title, "Algorithm Sprint #2");
    assert_eq!(contest.contest_type, ContestType::AlgorithmSprint);
    assert_eq!(contest.status, ContestStatus::Active);

    let contest = mock_contest("abc123", ContestStatus::Upcoming);
    assert_eq!(contest.status, ContestStatus::Upcoming);
}

// =============================================================
// Registration IDs
// =============================================================

#[test]
fn generated_registration_id_passes_the_join_rule() {
    let id = new_registration_id();
    assert!(id.starts_with("REG-"));
    assert!(crate::state::join::check_registration_id(&id).is_ok());
}

#[test]
fn generated_registration_ids_are_unique() {
    assert_ne!(new_registration_id(), new_registration_id());
}
