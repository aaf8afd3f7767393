//! Relation mutation actions
//!
//! A relation action declares an edge change: add or remove one pair, set a
//! pair enforcing the relation's cardinality, or clear edges matching a
//! source/target pattern.

use lattice_core::{RecordId, RecordUuid, RelationTypeId, Timestamp};
use serde::{Deserialize, Serialize};

/// The relation operation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationOperation {
    /// Add one edge
    Add,
    /// Remove one edge
    Remove,
    /// Make this the pair, removing whatever edges conflict with it
    Set,
    /// Remove every edge matching the endpoint pattern
    Clear,
}

impl RelationOperation {
    /// Operation name used in messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            RelationOperation::Add => "Add",
            RelationOperation::Remove => "Remove",
            RelationOperation::Set => "Set",
            RelationOperation::Clear => "Clear",
        }
    }
}

/// One endpoint of a relation action
///
/// Callers may address a record by either identity. `Unset` is the
/// wildcard: valid only for `Clear`, where it means "any record on this
/// end".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndpointRef {
    /// Internal id (must not be the unset sentinel)
    Id(RecordId),
    /// External UUID
    Uuid(RecordUuid),
    /// Wildcard, Clear only
    Unset,
}

impl EndpointRef {
    /// Check whether this endpoint is the wildcard
    pub fn is_unset(&self) -> bool {
        matches!(self, EndpointRef::Unset)
            || matches!(self, EndpointRef::Id(id) if id.is_unset())
    }
}

impl From<RecordId> for EndpointRef {
    fn from(id: RecordId) -> Self {
        EndpointRef::Id(id)
    }
}

impl From<RecordUuid> for EndpointRef {
    fn from(uuid: RecordUuid) -> Self {
        EndpointRef::Uuid(uuid)
    }
}

/// One relation mutation intent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationAction {
    /// What to do
    pub operation: RelationOperation,
    /// Relation type the edge belongs to
    pub relation_type: RelationTypeId,
    /// Source endpoint
    pub source: EndpointRef,
    /// Target endpoint
    pub target: EndpointRef,
    /// Change time; defaults to the batch timestamp when `None`
    pub changed_at: Option<Timestamp>,
}

impl RelationAction {
    /// Create a relation action
    pub fn new(
        operation: RelationOperation,
        relation_type: RelationTypeId,
        source: impl Into<EndpointRef>,
        target: impl Into<EndpointRef>,
    ) -> Self {
        RelationAction {
            operation,
            relation_type,
            source: source.into(),
            target: target.into(),
            changed_at: None,
        }
    }

    /// Set an explicit change time (builder style)
    pub fn at(mut self, changed_at: Timestamp) -> Self {
        self.changed_at = Some(changed_at);
        self
    }

    /// Shorthand: clear every edge of a relation type
    pub fn clear_all(relation_type: RelationTypeId) -> Self {
        Self::new(
            RelationOperation::Clear,
            relation_type,
            EndpointRef::Unset,
            EndpointRef::Unset,
        )
    }
}
