//! Tests for the domain user model.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[rstest]
fn user_id_parses_hyphenated_uuid() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(id.to_string(), VALID_ID);
}

#[rstest]
#[case("")]
#[case("not-a-uuid")]
fn user_id_rejects_invalid_values(#[case] raw: &str) {
    assert_eq!(UserId::new(raw), Err(UserValidationError::InvalidId));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn user_name_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(UserName::new(raw), Err(UserValidationError::EmptyName));
}

#[rstest]
#[case("Omkar")]
#[case("  padded  ")]
#[case("émoji 🦀")]
fn user_name_keeps_input_verbatim(#[case] raw: &str) {
    let name = UserName::new(raw).expect("valid name");
    assert_eq!(name.as_ref(), raw);
}

#[rstest]
fn issue_stamps_both_timestamps_with_the_same_instant(now: DateTime<Utc>) {
    let name = UserName::new("Omkar").expect("valid name");
    let record = NewUser::issue(name, now);

    assert_eq!(record.created_at, now);
    assert_eq!(record.updated_at, now);
    assert_eq!(record.name.as_ref(), "Omkar");
}

#[rstest]
fn issue_generates_fresh_identity_per_call(now: DateTime<Utc>) {
    let name = UserName::new("Omkar").expect("valid name");
    let first = NewUser::issue(name.clone(), now);
    let second = NewUser::issue(name, now);

    assert_ne!(first.id, second.id);
    assert_ne!(first.api_key, second.api_key);
}

#[rstest]
fn user_id_serialises_as_string() {
    let id = UserId::new(VALID_ID).expect("valid id");
    let json = serde_json::to_value(id).expect("serialise id");
    assert_eq!(json, serde_json::Value::String(VALID_ID.to_owned()));
}
