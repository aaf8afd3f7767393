//! LatticeDB - embedded graph/object database write path
//!
//! LatticeDB's transaction core converts declarative mutation intents into
//! ordered sequences of primitive Add/Remove actions, the unit of
//! durability, index maintenance and replay.
//!
//! # Quick Start
//!
//! ```ignore
//! use latticedb::{Compiler, Record, RecordAction, TransactionBatch, Timestamp};
//!
//! // Collaborators (store, catalog, validator, arithmetic, notifier) are
//! // supplied by the surrounding database; the resolver is owned here.
//! let compiler = Compiler::new(&store, &catalog, &identity, &validator, &arith, &notifier);
//!
//! let batch = TransactionBatch::new(Timestamp::now())
//!     .with_action(RecordAction::insert(record));
//!
//! // Either a fully-materialized primitive list, or an error meaning
//! // nothing durable happened.
//! let executed = compiler.compile(&batch)?;
//! ```
//!
//! # Architecture
//!
//! Logical actions are modeled in [`lattice_engine::action`], compiled by
//! [`Compiler`] against the collaborator contracts in
//! [`lattice_core::traits`], and emitted as [`ExecutedTransaction`] for the
//! WAL writer and cache layer. Identity resolution lives in
//! [`IdentityResolver`].

pub use lattice_core::{
    Catalog, Error, IndexNotifier, Limits, PropertyId, PropertySchema, Record, RecordId,
    RecordUuid, RecordValidator, RelationLink, RelationSchema, RelationTypeId, Result, SegmentRef,
    StoreRead, Timestamp, TypeId, TypeSchema, Value, ValueArithmetic, ValueKind,
};
pub use lattice_engine::{
    AssertionAction, CompileError, CompileResult, Compiler, EndpointRef, ExecutedTransaction,
    MutationAction, PrimitiveAction, PrimitiveOp, PropertyAction, PropertyOperation, RecordAction,
    RecordOperation, RecordPrimitive, RecordSelector, RelationAction, RelationOperation,
    RelationPrimitive, Requirement, TransactionBatch,
};
pub use lattice_identity::IdentityResolver;
