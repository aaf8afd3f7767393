//! Logical mutation action model
//!
//! Callers declare intents: insert/update/delete a record, change a
//! relation, patch properties across a selection, assert an invariant.
//! The compiler turns each into primitive actions. The four families:
//!
//! - `record`: single-record operations with existence variants
//! - `relation`: edge operations including cardinality-enforcing Set
//! - `property`: bulk property patches over a selector
//! - `assertion`: pre-commit invariant checks, never producing primitives

pub mod assertion;
pub mod property;
pub mod record;
pub mod relation;

pub use assertion::{AssertionAction, Requirement};
pub use property::{PropertyAction, PropertyOperation, RecordSelector};
pub use record::{RecordAction, RecordOperation};
pub use relation::{EndpointRef, RelationAction, RelationOperation};

use serde::{Deserialize, Serialize};

/// One logical mutation action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MutationAction {
    /// Record insert/update/delete/retype/re-index
    Record(RecordAction),
    /// Relation add/remove/set/clear
    Relation(RelationAction),
    /// Bulk property patch
    Property(PropertyAction),
    /// Pre-commit invariant check
    Assertion(AssertionAction),
}

impl MutationAction {
    /// Short family + operation label for logs
    pub fn describe(&self) -> String {
        match self {
            MutationAction::Record(a) => format!("Record.{}", a.operation.name()),
            MutationAction::Relation(a) => format!("Relation.{}", a.operation.name()),
            MutationAction::Property(a) => format!("Property.{}", a.operation.name()),
            MutationAction::Assertion(a) => format!("Assertion.{}", a.requirement.name()),
        }
    }
}

impl From<RecordAction> for MutationAction {
    fn from(action: RecordAction) -> Self {
        MutationAction::Record(action)
    }
}

impl From<RelationAction> for MutationAction {
    fn from(action: RelationAction) -> Self {
        MutationAction::Relation(action)
    }
}

impl From<PropertyAction> for MutationAction {
    fn from(action: PropertyAction) -> Self {
        MutationAction::Property(action)
    }
}

impl From<AssertionAction> for MutationAction {
    fn from(action: AssertionAction) -> Self {
        MutationAction::Assertion(action)
    }
}
