//! Record snapshot type
//!
//! A [`Record`] is the full state of one object at a point in time: its dual
//! identity (stable UUID + compact internal id), its type, its property bag
//! and its creation timestamp. Records are what logical insert/update/delete
//! actions carry in, what the store serves back, and what record primitives
//! carry down to the durability layer.

use crate::timestamp::Timestamp;
use crate::types::{PropertyId, RecordId, RecordUuid, TypeId};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full snapshot of one record
///
/// ## Identity
///
/// Either identity field may be unset when a caller constructs a record for
/// a mutation action (`id == RecordId::UNSET`, `uuid == None`). The compiler
/// resolves or creates the missing side before any primitive is emitted;
/// records inside primitives always carry both identities.
///
/// ## Creation timestamp
///
/// `created_at` is `None` until first persisted. Insert-family operations
/// default it to the batch timestamp; update-family operations preserve the
/// stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Compact internal id (`RecordId::UNSET` until resolved)
    pub id: RecordId,
    /// Stable external UUID (`None` until resolved or created)
    pub uuid: Option<RecordUuid>,
    /// Record type
    pub type_id: TypeId,
    /// Property bag; absent entries read as the schema default
    pub properties: BTreeMap<PropertyId, Value>,
    /// Creation time (`None` until first persisted)
    pub created_at: Option<Timestamp>,
}

impl Record {
    /// Create an empty record of a type, with no identity assigned
    pub fn new(type_id: TypeId) -> Self {
        Record {
            id: RecordId::UNSET,
            uuid: None,
            type_id,
            properties: BTreeMap::new(),
            created_at: None,
        }
    }

    /// Set the internal id (builder style)
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    /// Set the external UUID (builder style)
    pub fn with_uuid(mut self, uuid: RecordUuid) -> Self {
        self.uuid = Some(uuid);
        self
    }

    /// Set a property (builder style)
    pub fn with_property(mut self, property: PropertyId, value: impl Into<Value>) -> Self {
        self.properties.insert(property, value.into());
        self
    }

    /// Set the creation timestamp (builder style)
    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Read a property value
    pub fn property(&self, property: PropertyId) -> Option<&Value> {
        self.properties.get(&property)
    }

    /// Set a property value, returning the previous value if any
    pub fn set_property(&mut self, property: PropertyId, value: Value) -> Option<Value> {
        self.properties.insert(property, value)
    }

    /// Remove a property, returning the previous value if any
    pub fn remove_property(&mut self, property: PropertyId) -> Option<Value> {
        self.properties.remove(&property)
    }

    /// Check whether both identity fields are assigned
    pub fn has_full_identity(&self) -> bool {
        !self.id.is_unset() && self.uuid.is_some()
    }

    /// Number of properties currently set
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}
