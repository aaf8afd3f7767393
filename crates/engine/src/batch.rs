//! Transaction batch
//!
//! An ordered collection of logical actions compiled and applied as one
//! unit. The batch carries the commit timestamp every primitive inherits,
//! and an optional set of lock exemptions the outer store lock consumes;
//! the compiler itself never interprets the exemptions.

use crate::action::MutationAction;
use lattice_core::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered logical actions plus commit timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionBatch {
    /// Actions in declaration order
    pub actions: Vec<MutationAction>,
    /// Commit timestamp assigned to the batch
    pub timestamp: Timestamp,
    /// Records the outer lock should not re-lock for this batch
    pub lock_exemptions: HashSet<RecordId>,
}

impl TransactionBatch {
    /// Create an empty batch with a commit timestamp
    pub fn new(timestamp: Timestamp) -> Self {
        TransactionBatch {
            actions: Vec::new(),
            timestamp,
            lock_exemptions: HashSet::new(),
        }
    }

    /// Append an action (builder style)
    pub fn with_action(mut self, action: impl Into<MutationAction>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Append an action
    pub fn push(&mut self, action: impl Into<MutationAction>) {
        self.actions.push(action.into());
    }

    /// Exempt a record from outer locking (builder style)
    pub fn with_lock_exemption(mut self, id: RecordId) -> Self {
        self.lock_exemptions.insert(id);
        self
    }

    /// Number of actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check whether the batch holds no actions
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
