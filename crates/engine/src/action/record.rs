//! Record mutation actions
//!
//! A record action is a caller-declared intent over one record: insert,
//! delete, update, upsert, retype or re-index. The existence/comparison
//! variants have distinct semantics; the operation table lives with the
//! compiler, this module only models the payload.

use lattice_core::{Record, TypeId};
use serde::{Deserialize, Serialize};

/// The record operation set
///
/// Naming is explicit about existence handling:
/// - `...OrFail` requires the record to exist (or, for insert, requires the
///   identity registration to succeed)
/// - `...IfExists` / `...IfNotExists` tolerate the other case as a no-op
/// - `Force...` skips old-vs-new comparison and always rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordOperation {
    /// Insert; identity conflicts fail the batch
    InsertOrFail,
    /// Insert unless a record with this identity already exists
    InsertIfNotExists,
    /// Delete an existing record and every relation touching it
    DeleteOrFail,
    /// Delete if present, no-op if missing
    DeleteIfExists,
    /// Rewrite an existing record unconditionally
    UpdateOrFail,
    /// Rewrite an existing record only where state actually differs;
    /// no-op if missing
    UpdateIfExists,
    /// Rewrite an existing record without diffing old vs new
    ForceUpdate,
    /// Insert if missing, rewrite-if-different if present
    Upsert,
    /// Insert if missing, rewrite unconditionally if present
    ForceUpsert,
    /// Move a record to another type, carrying forward defaults
    ChangeType,
    /// Queue a full re-index; emits no primitives
    ReIndex,
}

impl RecordOperation {
    /// Operation name used in messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            RecordOperation::InsertOrFail => "InsertOrFail",
            RecordOperation::InsertIfNotExists => "InsertIfNotExists",
            RecordOperation::DeleteOrFail => "DeleteOrFail",
            RecordOperation::DeleteIfExists => "DeleteIfExists",
            RecordOperation::UpdateOrFail => "UpdateOrFail",
            RecordOperation::UpdateIfExists => "UpdateIfExists",
            RecordOperation::ForceUpdate => "ForceUpdate",
            RecordOperation::Upsert => "Upsert",
            RecordOperation::ForceUpsert => "ForceUpsert",
            RecordOperation::ChangeType => "ChangeType",
            RecordOperation::ReIndex => "ReIndex",
        }
    }
}

/// One record mutation intent
///
/// The record snapshot carries the candidate state. Either identity field
/// may be unset; the compiler resolves or creates identities according to
/// the operation. For `ChangeType` the snapshot's `type_id` is the NEW
/// type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordAction {
    /// What to do
    pub operation: RecordOperation,
    /// Candidate record state
    pub record: Record,
}

impl RecordAction {
    /// Create a record action
    pub fn new(operation: RecordOperation, record: Record) -> Self {
        RecordAction { operation, record }
    }

    /// Shorthand: insert a fresh record of a type
    pub fn insert(record: Record) -> Self {
        Self::new(RecordOperation::InsertOrFail, record)
    }

    /// Shorthand: delete, requiring existence
    pub fn delete(record: Record) -> Self {
        Self::new(RecordOperation::DeleteOrFail, record)
    }

    /// Shorthand: retype a record
    pub fn change_type(record: Record, new_type: TypeId) -> Self {
        let mut record = record;
        record.type_id = new_type;
        Self::new(RecordOperation::ChangeType, record)
    }
}
