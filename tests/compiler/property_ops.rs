//! Property Operation Tests
//!
//! Bulk property patches: selector resolution, working-copy mutation, and
//! delegation through the force-update path with scoped index work.

use crate::common::*;
use latticedb::{
    PrimitiveAction, PrimitiveOp, PropertyAction, PropertyOperation, RecordSelector,
    TransactionBatch,
};

fn batch_with(action: PropertyAction) -> TransactionBatch {
    TransactionBatch::new(BATCH_TS).with_action(action)
}

/// Collect the Add-side records, keyed by id, from a rewrite expansion.
fn added_records(txn: &latticedb::ExecutedTransaction) -> Vec<&Record> {
    txn.primitives
        .iter()
        .filter_map(|p| match p {
            PrimitiveAction::Record(r) if r.op == PrimitiveOp::Add => Some(&r.record),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Update / UpdateIfDifferent
// ============================================================================

#[test]
fn update_overwrites_across_selection() {
    let fx = Fixture::new();
    let a = fx.seed_account(1, 10);
    let b = fx.seed_account(2, 20);
    let txn = fx
        .compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::Update,
            RecordSelector::Ids(vec![a, b]),
            vec![PROP_BALANCE],
            vec![Value::Int(99)],
        )))
        .unwrap();

    // Remove+Add per record.
    assert_eq!(txn.len(), 4);
    let added = added_records(&txn);
    assert_eq!(added.len(), 2);
    assert!(added
        .iter()
        .all(|r| r.property(PROP_BALANCE) == Some(&Value::Int(99))));
}

#[test]
fn update_if_different_skips_matching_records_entirely() {
    let fx = Fixture::new();
    let same = fx.seed_account(1, 99);
    let different = fx.seed_account(2, 20);
    let txn = fx
        .compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::UpdateIfDifferent,
            RecordSelector::Ids(vec![same, different]),
            vec![PROP_BALANCE],
            vec![Value::Int(99)],
        )))
        .unwrap();

    // Only the differing record expands.
    assert_eq!(txn.len(), 2);
    let added = added_records(&txn);
    assert_eq!(added[0].id, different);
    assert_eq!(added[0].property(PROP_BALANCE), Some(&Value::Int(99)));
    // One notification, for the rewritten record only.
    assert_eq!(fx.notifier.count(), 1);
}

#[test]
fn update_if_different_uses_type_aware_equality() {
    let fx = Fixture::new();
    let id = RecordId::new(1);
    let uuid = fx.identity.get_uuid_or_create(id).unwrap();
    fx.store.put(
        Record::new(TYPE_ACCOUNT)
            .with_id(id)
            .with_uuid(uuid)
            .with_property(PROP_BALANCE, 0i64)
            .with_property(PROP_COUNT, 1i64)
            .with_created_at(Timestamp::from_secs(100)),
    );
    // Int(1) is already there; writing Int(1) again changes nothing.
    let txn = fx
        .compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::UpdateIfDifferent,
            RecordSelector::id(id),
            vec![PROP_COUNT],
            vec![Value::Int(1)],
        )))
        .unwrap();
    assert!(txn.is_empty());
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn reset_removes_listed_properties() {
    let fx = Fixture::new();
    let id = RecordId::new(1);
    let uuid = fx.identity.get_uuid_or_create(id).unwrap();
    fx.store.put(
        Record::new(TYPE_ACCOUNT)
            .with_id(id)
            .with_uuid(uuid)
            .with_property(PROP_BALANCE, 50i64)
            .with_property(PROP_COUNT, 7i64)
            .with_created_at(Timestamp::from_secs(100)),
    );

    let txn = fx
        .compiler()
        .compile(&batch_with(PropertyAction::reset(
            RecordSelector::id(id),
            vec![PROP_COUNT],
        )))
        .unwrap();

    let added = added_records(&txn);
    assert_eq!(added.len(), 1);
    // Count is gone from the snapshot; reads fall back to the schema.
    assert_eq!(added[0].property(PROP_COUNT), None);
    assert_eq!(added[0].property(PROP_BALANCE), Some(&Value::Int(50)));
}

#[test]
fn reset_with_values_is_rejected_as_malformed() {
    let fx = Fixture::new();
    let id = fx.seed_account(1, 10);
    let action = PropertyAction::new(
        PropertyOperation::Reset,
        RecordSelector::id(id),
        vec![PROP_BALANCE],
        vec![Value::Int(1)],
    );
    let err = fx.compiler().compile(&batch_with(action)).unwrap_err();
    assert!(matches!(
        err.source_kind(),
        Error::UnsupportedOperation { .. }
    ));
}

// ============================================================================
// Add / Multiply
// ============================================================================

#[test]
fn add_accumulates_present_and_seeds_absent() {
    let fx = Fixture::new();
    // Record 1 has count 10; record 2 has no count at all.
    let one = RecordId::new(1);
    let uuid_one = fx.identity.get_uuid_or_create(one).unwrap();
    fx.store.put(
        Record::new(TYPE_ACCOUNT)
            .with_id(one)
            .with_uuid(uuid_one)
            .with_property(PROP_BALANCE, 0i64)
            .with_property(PROP_COUNT, 10i64)
            .with_created_at(Timestamp::from_secs(100)),
    );
    let two = fx.seed_account(2, 0);

    let txn = fx
        .compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::Add,
            RecordSelector::Ids(vec![one, two]),
            vec![PROP_COUNT],
            vec![Value::Int(5)],
        )))
        .unwrap();

    let added = added_records(&txn);
    assert_eq!(added.len(), 2);
    assert_eq!(added[0].property(PROP_COUNT), Some(&Value::Int(15)));
    assert_eq!(added[1].property(PROP_COUNT), Some(&Value::Int(5)));
}

#[test]
fn add_scopes_index_work_to_touched_properties() {
    let fx = Fixture::new();
    let id = fx.seed_account(1, 10);
    fx.compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::Add,
            RecordSelector::id(id),
            vec![PROP_COUNT],
            vec![Value::Int(5)],
        )))
        .unwrap();

    let notifications = fx.notifier.all();
    assert_eq!(notifications.len(), 1);
    match &notifications[0] {
        Notification::Ensure { id: notified, excluded } => {
            assert_eq!(*notified, id);
            // Every account property except count is known unaffected.
            let excluded = excluded.as_ref().unwrap();
            assert!(excluded.contains(&PROP_BALANCE));
            assert!(!excluded.contains(&PROP_COUNT));
        }
        other => panic!("expected ensure notification, got {:?}", other),
    }
}

#[test]
fn multiply_combines_through_arithmetic() {
    let fx = Fixture::new();
    let id = RecordId::new(1);
    let uuid = fx.identity.get_uuid_or_create(id).unwrap();
    fx.store.put(
        Record::new(TYPE_ACCOUNT)
            .with_id(id)
            .with_uuid(uuid)
            .with_property(PROP_BALANCE, 6i64)
            .with_created_at(Timestamp::from_secs(100)),
    );
    let txn = fx
        .compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::Multiply,
            RecordSelector::id(id),
            vec![PROP_BALANCE],
            vec![Value::Int(7)],
        )))
        .unwrap();
    assert_eq!(
        added_records(&txn)[0].property(PROP_BALANCE),
        Some(&Value::Int(42))
    );
}

#[test]
fn add_with_kind_mismatch_is_rejected() {
    let fx = Fixture::new();
    let id = fx.seed_account(1, 10);
    let err = fx
        .compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::Add,
            RecordSelector::id(id),
            vec![PROP_BALANCE],
            vec![Value::from("five")],
        )))
        .unwrap_err();
    assert!(matches!(err.source_kind(), Error::InvalidValue { .. }));
}

#[test]
fn mismatched_property_and_value_counts_are_rejected() {
    let fx = Fixture::new();
    let id = fx.seed_account(1, 10);
    let action = PropertyAction::new(
        PropertyOperation::Update,
        RecordSelector::id(id),
        vec![PROP_BALANCE, PROP_COUNT],
        vec![Value::Int(1)],
    );
    let err = fx.compiler().compile(&batch_with(action)).unwrap_err();
    assert!(matches!(
        err.source_kind(),
        Error::UnsupportedOperation { .. }
    ));
}

// ============================================================================
// Selector resolution
// ============================================================================

#[test]
fn selector_silently_skips_unknown_records() {
    let fx = Fixture::new();
    let known = fx.seed_account(1, 10);
    let txn = fx
        .compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::Update,
            RecordSelector::Ids(vec![known, RecordId::new(77)]),
            vec![PROP_BALANCE],
            vec![Value::Int(1)],
        )))
        .unwrap();
    // Only the known record expands.
    assert_eq!(added_records(&txn).len(), 1);
}

#[test]
fn selector_by_uuid_skips_unregistered() {
    let fx = Fixture::new();
    let known = fx.seed_account(1, 10);
    let known_uuid = fx.identity.get_uuid(known).unwrap();
    let txn = fx
        .compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::Update,
            RecordSelector::Uuids(vec![known_uuid, RecordUuid::new()]),
            vec![PROP_BALANCE],
            vec![Value::Int(1)],
        )))
        .unwrap();
    assert_eq!(added_records(&txn).len(), 1);
}

#[test]
fn selector_deduplicates_preserving_order() {
    let fx = Fixture::new();
    let a = fx.seed_account(1, 10);
    let b = fx.seed_account(2, 20);
    let txn = fx
        .compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::Update,
            RecordSelector::Ids(vec![a, b, a, a]),
            vec![PROP_BALANCE],
            vec![Value::Int(1)],
        )))
        .unwrap();
    let added = added_records(&txn);
    assert_eq!(added.len(), 2);
    assert_eq!(added[0].id, a);
    assert_eq!(added[1].id, b);
}

#[test]
fn selector_of_type_touches_every_record_of_that_type() {
    let fx = Fixture::new();
    fx.seed_account(1, 10);
    fx.seed_account(2, 20);
    fx.seed_person(3, "Alice");
    let txn = fx
        .compiler()
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::Update,
            RecordSelector::OfType(TYPE_ACCOUNT),
            vec![PROP_BALANCE],
            vec![Value::Int(0)],
        )))
        .unwrap();
    assert_eq!(added_records(&txn).len(), 2);
}

#[test]
fn selector_fanout_limit_is_enforced() {
    let fx = Fixture::new();
    fx.seed_account(1, 10);
    fx.seed_account(2, 20);
    let limits = Limits {
        max_selector_fanout: 1,
        ..Limits::default()
    };
    let err = fx
        .compiler()
        .with_limits(limits)
        .compile(&batch_with(PropertyAction::new(
            PropertyOperation::Update,
            RecordSelector::OfType(TYPE_ACCOUNT),
            vec![PROP_BALANCE],
            vec![Value::Int(0)],
        )))
        .unwrap_err();
    assert!(matches!(err.source_kind(), Error::LimitExceeded { .. }));
}
