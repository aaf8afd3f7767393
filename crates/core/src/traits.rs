//! Collaborator contracts consumed by the write path
//!
//! The compiler performs no I/O of its own. Everything it needs from the
//! surrounding store is expressed as a trait here, so the store, schema
//! catalog, validator, arithmetic helper and index notifier can be swapped
//! without touching compilation logic:
//!
//! - [`StoreRead`]: currently-visible record and relation state
//! - [`Catalog`]: type/relation definitions and type-membership enumeration
//! - [`RecordValidator`]: value validation, default filling, state diffing
//! - [`ValueArithmetic`]: typed numeric accumulation
//! - [`IndexNotifier`]: index-maintenance enqueueing
//!
//! Thread safety: implementations must be safe to share across threads
//! (`Send + Sync`). The compiler itself reads under the store's outer write
//! exclusion and never synchronizes internally.

use crate::error::Result;
use crate::record::Record;
use crate::relation::RelationLink;
use crate::schema::{PropertySchema, RelationSchema, TypeSchema};
use crate::types::{PropertyId, RecordId, RelationTypeId, TypeId};
use crate::value::Value;
use std::collections::HashSet;

/// Read surface of the record store
///
/// Serves the state visible to the current transaction. Reads are not
/// internally synchronized; the outer single-writer lock guarantees
/// stability for the duration of one compilation.
pub trait StoreRead: Send + Sync {
    /// Check whether a record exists
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn contains(&self, id: RecordId) -> Result<bool>;

    /// Get a record snapshot
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if the record does not exist.
    fn get(&self, id: RecordId) -> Result<Record>;

    /// Get several record snapshots at once
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` for the first missing id.
    fn get_many(&self, ids: &[RecordId]) -> Result<Vec<Record>>;

    /// Enumerate every relation edge touching a record, on either end
    ///
    /// The returned list is a snapshot owned by the caller; it stays valid
    /// while removal primitives are being built from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn relations_with(&self, id: RecordId) -> Result<Vec<RelationLink>>;
}

/// Schema and definition surface
///
/// Owns record-type and relation-type definitions, type membership, and the
/// relation-cardinality rules that decide which edges conflict with a new
/// one.
pub trait Catalog: Send + Sync {
    /// Get the schema of a record type
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the type is not defined.
    fn type_schema(&self, type_id: TypeId) -> Result<TypeSchema>;

    /// Get the definition of a relation type
    ///
    /// # Errors
    ///
    /// Returns `UnknownRelationType` if the relation type is not defined.
    fn relation_schema(&self, relation_type: RelationTypeId) -> Result<RelationSchema>;

    /// Enumerate the ids of all records of a type
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the type is not defined.
    fn ids_of_type(&self, type_id: TypeId) -> Result<Vec<RecordId>>;

    /// Enumerate the current edges of a relation type
    ///
    /// The returned list is a snapshot owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRelationType` if the relation type is not defined.
    fn relation_members(&self, relation_type: RelationTypeId) -> Result<Vec<RelationLink>>;

    /// Check whether the relation currently holds exactly this pair
    ///
    /// For symmetric relations the pair matches in either direction.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRelationType` if the relation type is not defined.
    fn holds(
        &self,
        relation_type: RelationTypeId,
        source: RecordId,
        target: RecordId,
    ) -> Result<bool>;

    /// Compute the edges that must be removed before (source, target) can
    /// be added without violating the relation's cardinality
    ///
    /// Empty for unconstrained relations. For a singular end, contains the
    /// current partner edge of that end, if any.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRelationType` if the relation type is not defined.
    fn conflicting_links(
        &self,
        relation_type: RelationTypeId,
        source: RecordId,
        target: RecordId,
    ) -> Result<Vec<RelationLink>>;
}

/// Value validation and state diffing
pub trait RecordValidator: Send + Sync {
    /// Validate incoming property values against the schema and fill
    /// missing properties with defaults
    ///
    /// `old` is the stored state for update-family operations; generated
    /// properties absent on `new` are carried forward from it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` / `UnknownProperty` on schema violations.
    fn validate_and_fill_defaults(
        &self,
        schema: &TypeSchema,
        new: Record,
        old: Option<&Record>,
    ) -> Result<Record>;

    /// Check whether two record states differ, ignoring system-generated
    /// properties
    fn differ_ignoring_generated(&self, schema: &TypeSchema, new: &Record, old: &Record) -> bool;
}

/// Typed numeric accumulation over property values
pub trait ValueArithmetic: Send + Sync {
    /// Combine `old + delta` for the given property
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the operands do not fit the property kind.
    fn add(&self, property: &PropertySchema, old: &Value, delta: &Value) -> Result<Value>;

    /// Combine `old * factor` for the given property
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the operands do not fit the property kind.
    fn multiply(&self, property: &PropertySchema, old: &Value, factor: &Value) -> Result<Value>;
}

/// Index-maintenance notification sink
///
/// The compiler reports records whose properties changed; the notifier
/// decides whether index work happens inline or is queued to the background
/// scheduler. `excluded` carries property ids the caller knows are
/// unaffected, so their indexes are left alone.
pub trait IndexNotifier: Send + Sync {
    /// Report a record whose properties changed
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be enqueued.
    fn ensure_or_queue_index(
        &self,
        record: &Record,
        excluded: Option<&HashSet<PropertyId>>,
    ) -> Result<()>;

    /// Queue a full re-index of a record by id
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be enqueued.
    fn queue_indexing(
        &self,
        id: RecordId,
        type_id: TypeId,
        excluded: Option<&HashSet<PropertyId>>,
    ) -> Result<()>;
}
