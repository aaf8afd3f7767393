//! Primitive action model
//!
//! Primitives are the output of compilation: atomic Add/Remove operations
//! over one record or one relation edge. They are the unit the durability
//! and indexing layers operate on, and every primitive can compute its
//! logical inverse for undo-transaction construction.

use lattice_core::{Record, RelationLink, SegmentRef};
use serde::{Deserialize, Serialize};

/// Direction of a primitive action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveOp {
    /// Introduce the payload into the store
    Add,
    /// Withdraw the payload from the store
    Remove,
}

impl PrimitiveOp {
    /// The inverse direction
    pub fn opposite(&self) -> PrimitiveOp {
        match self {
            PrimitiveOp::Add => PrimitiveOp::Remove,
            PrimitiveOp::Remove => PrimitiveOp::Add,
        }
    }
}

/// Add or Remove of one full record snapshot
///
/// `segment` is an opaque physical-storage reference filled in by the
/// durability layer; compilation always leaves it `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPrimitive {
    /// Direction
    pub op: PrimitiveOp,
    /// Full record snapshot
    pub record: Record,
    /// Physical-storage segment, assigned downstream
    pub segment: Option<SegmentRef>,
}

impl RecordPrimitive {
    /// Create a record primitive with no segment assigned
    pub fn new(op: PrimitiveOp, record: Record) -> Self {
        RecordPrimitive {
            op,
            record,
            segment: None,
        }
    }

    /// The logically inverse primitive: same payload, flipped direction
    pub fn opposite(&self) -> Self {
        RecordPrimitive {
            op: self.op.opposite(),
            record: self.record.clone(),
            segment: self.segment,
        }
    }
}

/// Add or Remove of one relation edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationPrimitive {
    /// Direction
    pub op: PrimitiveOp,
    /// Fully-resolved edge
    pub link: RelationLink,
}

impl RelationPrimitive {
    /// Create a relation primitive
    pub fn new(op: PrimitiveOp, link: RelationLink) -> Self {
        RelationPrimitive { op, link }
    }

    /// The logically inverse primitive: same payload, flipped direction
    pub fn opposite(&self) -> Self {
        RelationPrimitive {
            op: self.op.opposite(),
            link: self.link,
        }
    }
}

/// One atomic primitive action over a record or a relation edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrimitiveAction {
    /// Record Add/Remove
    Record(RecordPrimitive),
    /// Relation Add/Remove
    Relation(RelationPrimitive),
}

impl PrimitiveAction {
    /// Add a record
    pub fn add_record(record: Record) -> Self {
        PrimitiveAction::Record(RecordPrimitive::new(PrimitiveOp::Add, record))
    }

    /// Remove a record
    pub fn remove_record(record: Record) -> Self {
        PrimitiveAction::Record(RecordPrimitive::new(PrimitiveOp::Remove, record))
    }

    /// Add a relation edge
    pub fn add_relation(link: RelationLink) -> Self {
        PrimitiveAction::Relation(RelationPrimitive::new(PrimitiveOp::Add, link))
    }

    /// Remove a relation edge
    pub fn remove_relation(link: RelationLink) -> Self {
        PrimitiveAction::Relation(RelationPrimitive::new(PrimitiveOp::Remove, link))
    }

    /// Direction of this primitive
    pub fn op(&self) -> PrimitiveOp {
        match self {
            PrimitiveAction::Record(p) => p.op,
            PrimitiveAction::Relation(p) => p.op,
        }
    }

    /// Check whether this primitive targets a record
    pub fn is_record(&self) -> bool {
        matches!(self, PrimitiveAction::Record(_))
    }

    /// Check whether this primitive targets a relation edge
    pub fn is_relation(&self) -> bool {
        matches!(self, PrimitiveAction::Relation(_))
    }

    /// The logically inverse primitive: same payload, flipped direction
    pub fn opposite(&self) -> PrimitiveAction {
        match self {
            PrimitiveAction::Record(p) => PrimitiveAction::Record(p.opposite()),
            PrimitiveAction::Relation(p) => PrimitiveAction::Relation(p.opposite()),
        }
    }
}
