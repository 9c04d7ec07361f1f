//! Tests for strongly-typed identifiers

use core_kernel::{GoalId, MemberId, TransactionId};
use uuid::Uuid;

#[test]
fn test_ids_are_unique() {
    let a = GoalId::new();
    let b = GoalId::new();
    assert_ne!(a, b);
}

#[test]
fn test_display_carries_prefix() {
    assert!(GoalId::new().to_string().starts_with("GOL-"));
    assert!(TransactionId::new().to_string().starts_with("TXN-"));
    assert!(MemberId::new().to_string().starts_with("MBR-"));
}

#[test]
fn test_parse_round_trip_with_prefix() {
    let id = GoalId::new();
    let parsed: GoalId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_parse_bare_uuid() {
    let uuid = Uuid::new_v4();
    let parsed: TransactionId = uuid.to_string().parse().unwrap();
    assert_eq!(parsed.as_uuid(), &uuid);
}

#[test]
fn test_new_v7_produces_version_7() {
    let id = TransactionId::new_v7();
    assert_eq!(id.as_uuid().get_version_num(), 7);
}

#[test]
fn test_serde_is_transparent() {
    let id = GoalId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", id.as_uuid()));

    let back: GoalId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
