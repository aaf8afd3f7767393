//! Compilation boundary error
//!
//! Everything that can go wrong while compiling a batch (identity
//! conflicts, missing records, schema violations, failed assertions,
//! malformed payloads) is caught at the `compile` boundary and re-raised
//! as a [`CompileError`]. The type itself is the marker: receiving one
//! means NO durable mutation has occurred, distinguishing compile-time
//! rejection from failures after primitives started being applied (which
//! are fatal and handled by recovery, outside this crate).
//!
//! The one caveat: identity registrations made while compiling earlier
//! actions persist in the resolver. They are unreferenced and harmless.

use lattice_core::Error;
use thiserror::Error as ThisError;

/// Result type alias for compilation
pub type CompileResult<T> = std::result::Result<T, CompileError>;

/// A batch was rejected during compilation; the store was never touched
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum CompileError {
    /// A specific action failed to expand
    #[error("action {action_index} rejected before any durable mutation: {source}")]
    Rejected {
        /// Position of the failing action in the batch
        action_index: usize,
        /// The underlying failure
        source: Error,
    },

    /// The batch itself was malformed or over limits
    #[error("batch rejected before any durable mutation: {source}")]
    Invalid {
        /// The underlying failure
        source: Error,
    },
}

impl CompileError {
    /// Wrap an action-level failure
    pub fn rejected(action_index: usize, source: Error) -> Self {
        CompileError::Rejected {
            action_index,
            source,
        }
    }

    /// Wrap a batch-level failure
    pub fn invalid(source: Error) -> Self {
        CompileError::Invalid { source }
    }

    /// The underlying error kind
    pub fn source_kind(&self) -> &Error {
        match self {
            CompileError::Rejected { source, .. } => source,
            CompileError::Invalid { source } => source,
        }
    }
}
