//! Property mutation actions
//!
//! A property action patches one or more properties across every record a
//! selector resolves to. Selector resolution silently skips records that no
//! longer exist; each surviving record is rewritten through the force-update
//! path, scoped to the touched properties.

use lattice_core::{PropertyId, RecordId, RecordUuid, TypeId, Value};
use serde::{Deserialize, Serialize};

/// The property operation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyOperation {
    /// Unconditionally overwrite each listed property
    Update,
    /// Overwrite only properties whose current value differs
    UpdateIfDifferent,
    /// Remove each listed property (reads revert to the schema default)
    Reset,
    /// Numeric accumulation: old + value, or value when absent
    Add,
    /// Numeric accumulation: old * value, or value when absent
    Multiply,
}

impl PropertyOperation {
    /// Operation name used in messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            PropertyOperation::Update => "Update",
            PropertyOperation::UpdateIfDifferent => "UpdateIfDifferent",
            PropertyOperation::Reset => "Reset",
            PropertyOperation::Add => "Add",
            PropertyOperation::Multiply => "Multiply",
        }
    }

    /// Check whether this operation carries one value per property
    pub fn carries_values(&self) -> bool {
        !matches!(self, PropertyOperation::Reset)
    }
}

/// Which records a property action or assertion applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordSelector {
    /// Explicit internal ids
    Ids(Vec<RecordId>),
    /// Explicit UUIDs, resolved through the identity resolver
    Uuids(Vec<RecordUuid>),
    /// Every record of a type
    OfType(TypeId),
}

impl RecordSelector {
    /// Select one record by internal id
    pub fn id(id: RecordId) -> Self {
        RecordSelector::Ids(vec![id])
    }

    /// Select one record by UUID
    pub fn uuid(uuid: RecordUuid) -> Self {
        RecordSelector::Uuids(vec![uuid])
    }
}

/// One property mutation intent
///
/// `properties` and `values` pair up positionally. `Reset` carries no
/// values; for every other operation the two lists must have equal length
/// or the action is rejected as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAction {
    /// What to do
    pub operation: PropertyOperation,
    /// Which records to patch
    pub selector: RecordSelector,
    /// Properties to touch
    pub properties: Vec<PropertyId>,
    /// One value per property; empty for `Reset`
    pub values: Vec<Value>,
}

impl PropertyAction {
    /// Create a property action with paired properties and values
    pub fn new(
        operation: PropertyOperation,
        selector: RecordSelector,
        properties: Vec<PropertyId>,
        values: Vec<Value>,
    ) -> Self {
        PropertyAction {
            operation,
            selector,
            properties,
            values,
        }
    }

    /// Shorthand: reset properties to their schema defaults
    pub fn reset(selector: RecordSelector, properties: Vec<PropertyId>) -> Self {
        Self::new(PropertyOperation::Reset, selector, properties, Vec::new())
    }

    /// Iterate (property, value) pairs
    pub fn assignments(&self) -> impl Iterator<Item = (PropertyId, &Value)> {
        self.properties.iter().copied().zip(self.values.iter())
    }
}
