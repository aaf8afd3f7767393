//! Write-path transaction engine for Lattice
//!
//! This crate turns declarative mutation batches into ordered primitive
//! actions:
//!
//! - `action`: the logical mutation action model (record, relation,
//!   property, assertion)
//! - `batch`: the transaction batch consumed by compilation
//! - `compiler`: the action compiler (identity resolution, existence
//!   checks, diffing, cascade expansion)
//! - `primitive`: atomic Add/Remove primitives with inversion
//! - `executed`: the durable-ready executed-transaction record
//! - `error`: the compile boundary error ("no durable effect yet")
//!
//! Compilation is side-effect-free with respect to durable state: the full
//! primitive list is materialized before anything is returned, so a failure
//! anywhere in a batch means the store was never touched. The identity
//! resolver is the documented exception: registrations it makes persist.

pub mod action;
pub mod batch;
pub mod compiler;
pub mod error;
pub mod executed;
pub mod primitive;

pub use action::{
    AssertionAction, EndpointRef, MutationAction, PropertyAction, PropertyOperation, RecordAction,
    RecordOperation, RecordSelector, RelationAction, RelationOperation, Requirement,
};
pub use batch::TransactionBatch;
pub use compiler::Compiler;
pub use error::{CompileError, CompileResult};
pub use executed::ExecutedTransaction;
pub use primitive::{PrimitiveAction, PrimitiveOp, RecordPrimitive, RelationPrimitive};
