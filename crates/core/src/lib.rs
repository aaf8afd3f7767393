//! Core types and traits for Lattice
//!
//! This crate defines the foundational types used throughout the write path:
//! - RecordUuid / RecordId: the dual identity of every record
//! - TypeId / PropertyId / RelationTypeId: schema discriminators
//! - Timestamp: microsecond commit and change times
//! - Value / ValueKind: the closed tagged property-value model
//! - Record / RelationLink: record and edge snapshots
//! - PropertySchema / TypeSchema / RelationSchema: definition shapes
//! - Error: the compilation error kind hierarchy
//! - Limits: batch size limits
//! - Traits: collaborator contracts (StoreRead, Catalog, RecordValidator,
//!   ValueArithmetic, IndexNotifier)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod record;
pub mod relation;
pub mod schema;
pub mod timestamp;
pub mod traits;
pub mod types;
pub mod value;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use limits::Limits;
pub use record::Record;
pub use relation::RelationLink;
pub use schema::{PropertySchema, RelationSchema, TypeSchema};
pub use timestamp::Timestamp;
pub use traits::{Catalog, IndexNotifier, RecordValidator, StoreRead, ValueArithmetic};
pub use types::{PropertyId, RecordId, RecordUuid, RelationTypeId, SegmentRef, TypeId};
pub use value::{Value, ValueKind};
