//! Resolved relation edge type
//!
//! A [`RelationLink`] is one fully-resolved edge: relation type, source and
//! target internal ids, and the time the edge last changed. Relation
//! primitives carry links; the store's read surface serves them back when
//! the compiler enumerates incident or conflicting edges.

use crate::timestamp::Timestamp;
use crate::types::{RecordId, RelationTypeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One resolved relation edge
///
/// Both endpoints are internal ids; UUID endpoints are resolved before a
/// link is ever built. Equality covers the full payload including
/// `changed_at`, so a Remove primitive's link matches the Add primitive
/// that created the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationLink {
    /// Relation type
    pub relation_type: RelationTypeId,
    /// Source record
    pub source: RecordId,
    /// Target record
    pub target: RecordId,
    /// Time of the change that produced this edge state
    pub changed_at: Timestamp,
}

impl RelationLink {
    /// Create a link
    pub fn new(
        relation_type: RelationTypeId,
        source: RecordId,
        target: RecordId,
        changed_at: Timestamp,
    ) -> Self {
        RelationLink {
            relation_type,
            source,
            target,
            changed_at,
        }
    }

    /// Check whether this link touches a record on either end
    pub fn touches(&self, id: RecordId) -> bool {
        self.source == id || self.target == id
    }

    /// Check whether this link connects the given pair, in this direction
    pub fn connects(&self, source: RecordId, target: RecordId) -> bool {
        self.source == source && self.target == target
    }
}

impl fmt::Display for RelationLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}->{}",
            self.relation_type, self.source, self.target
        )
    }
}
