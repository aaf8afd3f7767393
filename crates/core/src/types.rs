//! Core identifier types for Lattice
//!
//! This module defines the foundational identifiers:
//! - RecordUuid: stable external identity of a record (UUID v4)
//! - RecordId: compact internal identity of a record (dense integer)
//! - TypeId: record type discriminator
//! - PropertyId: property discriminator within a type
//! - RelationTypeId: relation type discriminator
//! - SegmentRef: opaque physical-storage segment reference

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable external identity of a record
///
/// A RecordUuid is a wrapper around a UUID v4. It is the identity a record
/// keeps across exports, replication and re-imports, while the compact
/// [`RecordId`] is only meaningful inside one store instance. The two are
/// bound together by the identity resolver; once both are assigned the
/// pairing is permanent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordUuid(Uuid);

impl RecordUuid {
    /// Create a new random RecordUuid using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a RecordUuid from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parse a RecordUuid from a string representation
    ///
    /// Accepts standard UUID format (with or without hyphens).
    /// Returns None if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Get the raw bytes of this RecordUuid
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for RecordUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compact internal identity of a record
///
/// Dense integer assigned by the identity resolver. Zero is the unset
/// sentinel: a record built by a caller before identity resolution carries
/// `RecordId::UNSET` until the compiler resolves or creates its identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct RecordId(u64);

impl RecordId {
    /// The unset sentinel (no internal id assigned yet)
    pub const UNSET: RecordId = RecordId(0);

    /// Create a RecordId from a raw integer
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Check whether this id is the unset sentinel
    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record type discriminator
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a TypeId from a raw integer
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Property discriminator within a record type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct PropertyId(u32);

impl PropertyId {
    /// Create a PropertyId from a raw integer
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relation type discriminator
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct RelationTypeId(u32);

impl RelationTypeId {
    /// Create a RelationTypeId from a raw integer
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RelationTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a physical-storage segment
///
/// Carried on record primitives for the durability layer; never interpreted
/// by the write path itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentRef(u64);

impl SegmentRef {
    /// Create a SegmentRef from a raw integer
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SegmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
