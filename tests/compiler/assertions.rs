//! Property Assertion Tests
//!
//! Pre-commit invariant checks: pass silently, or abort compilation naming
//! the offending record and property. Never any primitives.

use crate::common::*;
use latticedb::{
    AssertionAction, PropertyAction, PropertyOperation, RecordSelector, Requirement,
    TransactionBatch,
};

fn batch_with(action: AssertionAction) -> TransactionBatch {
    TransactionBatch::new(BATCH_TS).with_action(action)
}

#[test]
fn passing_assertion_produces_no_primitives() {
    let fx = Fixture::new();
    let id = fx.seed_account(1, 100);
    let txn = fx
        .compiler()
        .compile(&batch_with(AssertionAction::new(
            Requirement::GreaterOrEqual,
            RecordSelector::id(id),
            PROP_BALANCE,
            0i64,
        )))
        .unwrap();
    assert!(txn.is_empty());
}

#[test]
fn failing_assertion_names_record_and_property() {
    let fx = Fixture::new();
    let id = fx.seed_account(9, -1);
    let err = fx
        .compiler()
        .compile(&batch_with(AssertionAction::new(
            Requirement::GreaterOrEqual,
            RecordSelector::id(id),
            PROP_BALANCE,
            0i64,
        )))
        .unwrap_err();

    match err.source_kind() {
        Error::AssertionFailed {
            id: failed,
            property,
            requirement,
            actual,
            ..
        } => {
            assert_eq!(*failed, RecordId::new(9));
            assert_eq!(*property, PROP_BALANCE);
            assert_eq!(*requirement, "GreaterOrEqual");
            assert_eq!(*actual, Some(Value::Int(-1)));
        }
        other => panic!("expected assertion failure, got {:?}", other),
    }
    // The error message itself identifies the offender.
    let msg = err.to_string();
    assert!(msg.contains("record 9"));
    assert!(msg.contains("property 10"));
}

#[test]
fn absent_property_reads_schema_default() {
    let fx = Fixture::new();
    // Balance unset: default 0 satisfies Equal(0).
    let id = RecordId::new(1);
    let uuid = fx.identity.get_uuid_or_create(id).unwrap();
    fx.store.put(
        Record::new(TYPE_ACCOUNT)
            .with_id(id)
            .with_uuid(uuid)
            .with_created_at(Timestamp::from_secs(100)),
    );
    let txn = fx
        .compiler()
        .compile(&batch_with(AssertionAction::new(
            Requirement::Equal,
            RecordSelector::id(id),
            PROP_BALANCE,
            0i64,
        )))
        .unwrap();
    assert!(txn.is_empty());
}

#[test]
fn absent_property_without_default_fails() {
    let fx = Fixture::new();
    let id = fx.seed_account(1, 10);
    // Count has no default and is unset.
    let err = fx
        .compiler()
        .compile(&batch_with(AssertionAction::new(
            Requirement::Equal,
            RecordSelector::id(id),
            PROP_COUNT,
            0i64,
        )))
        .unwrap_err();
    match err.source_kind() {
        Error::AssertionFailed { actual, .. } => assert_eq!(*actual, None),
        other => panic!("expected assertion failure, got {:?}", other),
    }
}

#[test]
fn cross_kind_ordering_is_rejected() {
    let fx = Fixture::new();
    let id = fx.seed_account(1, 10);
    let err = fx
        .compiler()
        .compile(&batch_with(AssertionAction::new(
            Requirement::Less,
            RecordSelector::id(id),
            PROP_BALANCE,
            "ten",
        )))
        .unwrap_err();
    assert!(matches!(err.source_kind(), Error::InvalidValue { .. }));
}

#[test]
fn not_equal_requirement_over_selection() {
    let fx = Fixture::new();
    let a = fx.seed_account(1, 5);
    let b = fx.seed_account(2, 7);
    let txn = fx
        .compiler()
        .compile(&batch_with(AssertionAction::new(
            Requirement::NotEqual,
            RecordSelector::Ids(vec![a, b]),
            PROP_BALANCE,
            0i64,
        )))
        .unwrap();
    assert!(txn.is_empty());
}

#[test]
fn empty_selection_passes_vacuously() {
    let fx = Fixture::new();
    let txn = fx
        .compiler()
        .compile(&batch_with(AssertionAction::new(
            Requirement::Greater,
            RecordSelector::Uuids(vec![RecordUuid::new()]),
            PROP_BALANCE,
            0i64,
        )))
        .unwrap();
    assert!(txn.is_empty());
}

#[test]
fn failed_assertion_suppresses_earlier_expansions() {
    let fx = Fixture::new();
    let poor = fx.seed_account(1, -5);
    let batch = TransactionBatch::new(BATCH_TS)
        .with_action(PropertyAction::new(
            PropertyOperation::Add,
            RecordSelector::id(poor),
            vec![PROP_BALANCE],
            vec![Value::Int(1)],
        ))
        .with_action(AssertionAction::new(
            Requirement::GreaterOrEqual,
            RecordSelector::id(poor),
            PROP_BALANCE,
            0i64,
        ));

    // The property patch expanded fine, but the batch as a whole fails and
    // the caller receives nothing.
    let err = fx.compiler().compile(&batch).unwrap_err();
    assert!(err.to_string().contains("before any durable mutation"));
}
