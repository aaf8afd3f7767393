//! Executed transaction record
//!
//! The durable-ready output of compilation: the ordered primitive list plus
//! the commit timestamp. This is the unit handed to the WAL writer and the
//! cache invalidation logic, and the unit replay and undo operate on.

use crate::primitive::PrimitiveAction;
use lattice_core::Timestamp;
use serde::{Deserialize, Serialize};

/// Ordered primitives plus commit timestamp
///
/// Primitives must be applied in list order; within one logical-action
/// expansion a Remove of old state always precedes the Add of new state,
/// and relation removals precede the record removal they cascade from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutedTransaction {
    /// Primitives in application order
    pub primitives: Vec<PrimitiveAction>,
    /// Commit timestamp assigned to the batch
    pub timestamp: Timestamp,
}

impl ExecutedTransaction {
    /// Create an executed transaction record
    pub fn new(primitives: Vec<PrimitiveAction>, timestamp: Timestamp) -> Self {
        ExecutedTransaction {
            primitives,
            timestamp,
        }
    }

    /// Number of primitives
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check whether compilation produced no primitives
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Iterate primitives in application order
    pub fn iter(&self) -> impl Iterator<Item = &PrimitiveAction> {
        self.primitives.iter()
    }

    /// Build the undo transaction for this already-applied transaction
    ///
    /// Each primitive is inverted and the application order is reversed, so
    /// applying the result restores the state from before this transaction.
    /// `at` becomes the undo transaction's own commit timestamp.
    pub fn inverse(&self, at: Timestamp) -> ExecutedTransaction {
        let primitives = self
            .primitives
            .iter()
            .rev()
            .map(PrimitiveAction::opposite)
            .collect();
        ExecutedTransaction::new(primitives, at)
    }
}
