//! Error types for the write path
//!
//! This module defines the shared error kind hierarchy used during
//! compilation of mutation batches. We use `thiserror` for automatic
//! `Display` and `Error` trait implementations.
//!
//! The kinds map to distinct failure classes:
//! - identity: UUID/id pair unknown, or conflicting registration
//! - existence: operation requires a record the store does not hold
//! - schema: value does not fit the declared property kind
//! - assertion: a property assertion did not hold
//! - unsupported operation: malformed action payload
//! - store: collaborator-reported failure passthrough

use crate::types::{PropertyId, RecordId, RecordUuid, RelationTypeId, TypeId};
use crate::value::{Value, ValueKind};
use thiserror::Error;

/// Result type alias for write-path operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds raised while compiling mutation batches
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// UUID not registered with the identity resolver
    #[error("unknown uuid: {uuid}")]
    UnknownUuid {
        /// The unresolved UUID
        uuid: RecordUuid,
    },

    /// Internal id not registered with the identity resolver
    #[error("unknown internal id: {id}")]
    UnknownId {
        /// The unresolved id
        id: RecordId,
    },

    /// UUID/id pair conflicts with an existing registration
    ///
    /// Once both identities of a record are assigned they are permanently
    /// bound; registering either side against a different partner fails.
    #[error("identity conflict: id {id} / uuid {uuid} conflicts with an existing registration")]
    IdentityConflict {
        /// Internal id of the rejected pairing
        id: RecordId,
        /// UUID of the rejected pairing
        uuid: RecordUuid,
    },

    /// Operation requires a record identity but none was supplied
    #[error("record carries neither uuid nor internal id")]
    MissingIdentity,

    /// Operation requires an existing record
    #[error("record not found: {id}")]
    RecordNotFound {
        /// Resolved internal id with no stored record
        id: RecordId,
    },

    /// Record type is not defined in the schema
    #[error("unknown record type: {type_id}")]
    UnknownType {
        /// The undefined type
        type_id: TypeId,
    },

    /// Relation type is not defined in the schema
    #[error("unknown relation type: {relation_type}")]
    UnknownRelationType {
        /// The undefined relation type
        relation_type: RelationTypeId,
    },

    /// Value does not match the declared property kind
    #[error("invalid value for property {property}: expected {expected}, got {actual}")]
    InvalidValue {
        /// Property that rejected the value
        property: PropertyId,
        /// Kind declared by the schema
        expected: ValueKind,
        /// Kind of the incoming value
        actual: ValueKind,
    },

    /// Property is not declared on the record's type
    #[error("property {property} is not defined for type {type_id}")]
    UnknownProperty {
        /// The undeclared property
        property: PropertyId,
        /// Type whose schema was consulted
        type_id: TypeId,
    },

    /// A property assertion did not hold
    #[error(
        "assertion failed on record {id}, property {property}: \
         required {requirement} {expected:?}, found {actual:?}"
    )]
    AssertionFailed {
        /// Record that failed the assertion
        id: RecordId,
        /// Property that was checked
        property: PropertyId,
        /// Requirement description, e.g. "GreaterOrEqual"
        requirement: &'static str,
        /// Comparison value from the assertion
        expected: Value,
        /// Current value (None when absent with no schema default)
        actual: Option<Value>,
    },

    /// Malformed or unsupported action payload
    #[error("unsupported operation: {reason}")]
    UnsupportedOperation {
        /// What was wrong with the payload
        reason: String,
    },

    /// A configured limit was exceeded before expansion
    #[error("limit exceeded: {what} is {actual}, limit {limit}")]
    LimitExceeded {
        /// Which limit tripped
        what: &'static str,
        /// Configured maximum
        limit: usize,
        /// Observed size
        actual: usize,
    },

    /// Failure reported by a store/catalog collaborator
    #[error("store error: {message}")]
    Store {
        /// Collaborator-provided description
        message: String,
    },
}

impl Error {
    /// Shorthand for an unsupported-operation error
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Error::UnsupportedOperation {
            reason: reason.into(),
        }
    }

    /// Shorthand for a collaborator failure
    pub fn store(message: impl Into<String>) -> Self {
        Error::Store {
            message: message.into(),
        }
    }
}
