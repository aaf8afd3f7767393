//! Schema shapes served by the definition catalog
//!
//! The write path never owns schema storage; it consumes these shapes from
//! the [`Catalog`](crate::traits::Catalog) collaborator when validating
//! values, filling defaults and computing relation-cardinality conflicts.

use crate::types::{PropertyId, RelationTypeId, TypeId};
use crate::value::{Value, ValueKind};
use serde::{Deserialize, Serialize};

/// Definition of one property within a record type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Property discriminator
    pub id: PropertyId,
    /// Human-readable name, used in error messages
    pub name: String,
    /// Value kind incoming values must match
    pub kind: ValueKind,
    /// Default served when the property is absent on a record
    pub default: Option<Value>,
    /// System-generated property, ignored when diffing old vs new state
    pub generated: bool,
}

impl PropertySchema {
    /// Create a property definition
    pub fn new(id: PropertyId, name: impl Into<String>, kind: ValueKind) -> Self {
        PropertySchema {
            id,
            name: name.into(),
            kind,
            default: None,
            generated: false,
        }
    }

    /// Set the default value (builder style)
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mark as system-generated (builder style)
    pub fn generated(mut self) -> Self {
        self.generated = true;
        self
    }
}

/// Definition of one record type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSchema {
    /// Type discriminator
    pub id: TypeId,
    /// Human-readable name, used in error messages
    pub name: String,
    /// Properties of this type, in declaration order
    pub properties: Vec<PropertySchema>,
}

impl TypeSchema {
    /// Create a type definition
    pub fn new(id: TypeId, name: impl Into<String>) -> Self {
        TypeSchema {
            id,
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property definition (builder style)
    pub fn with_property(mut self, property: PropertySchema) -> Self {
        self.properties.push(property);
        self
    }

    /// Look up a property definition by id
    pub fn property(&self, id: PropertyId) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Iterate the ids of all declared properties
    pub fn property_ids(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.properties.iter().map(|p| p.id)
    }
}

/// Definition of one relation type
///
/// `singular_source` / `singular_target` express cardinality: a singular end
/// holds at most one edge per record on that end, so setting a new edge
/// first removes the previous partner. A one-to-one relation is singular on
/// both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSchema {
    /// Relation type discriminator
    pub id: RelationTypeId,
    /// Human-readable name, used in error messages
    pub name: String,
    /// Edge direction carries no meaning; (a,b) and (b,a) are one edge
    pub symmetric: bool,
    /// At most one edge per source record
    pub singular_source: bool,
    /// At most one edge per target record
    pub singular_target: bool,
}

impl RelationSchema {
    /// Create a relation definition with no cardinality constraints
    pub fn new(id: RelationTypeId, name: impl Into<String>) -> Self {
        RelationSchema {
            id,
            name: name.into(),
            symmetric: false,
            singular_source: false,
            singular_target: false,
        }
    }

    /// Mark as symmetric (builder style)
    pub fn symmetric(mut self) -> Self {
        self.symmetric = true;
        self
    }

    /// Constrain to one edge per source (builder style)
    pub fn singular_source(mut self) -> Self {
        self.singular_source = true;
        self
    }

    /// Constrain to one edge per target (builder style)
    pub fn singular_target(mut self) -> Self {
        self.singular_target = true;
        self
    }
}
