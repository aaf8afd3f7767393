//! Dual-key identity registry
//!
//! Maps the stable external UUID of a record to its compact internal id and
//! back. Both directions live in one interior-locked registry so a pairing
//! is always registered on both sides or neither.
//!
//! ## Binding rules
//!
//! - A UUID maps to at most one internal id, ever. Re-registration against
//!   a different id is an `IdentityConflict`.
//! - Internal ids are allocated densely, starting at 1. Zero is the unset
//!   sentinel and is never registered.
//! - Registrations are NOT transactional with the surrounding batch: a pair
//!   created while compiling one action persists even if a later action in
//!   the same batch fails. Orphaned pairs are unreferenced and harmless.

use lattice_core::{Error, RecordId, RecordUuid, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
struct RegistryInner {
    by_uuid: HashMap<RecordUuid, RecordId>,
    by_id: HashMap<RecordId, RecordUuid>,
    next_id: u64,
}

impl RegistryInner {
    fn allocate(&mut self) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn register(&mut self, id: RecordId, uuid: RecordUuid) {
        self.by_uuid.insert(uuid, id);
        self.by_id.insert(id, uuid);
        // Keep allocation dense past caller-supplied ids.
        if id.as_u64() >= self.next_id {
            self.next_id = id.as_u64() + 1;
        }
    }
}

/// Bidirectional UUID ↔ internal-id registry
///
/// All access goes through the operations below; the underlying maps are
/// never exposed. Reads take a shared lock, creations take the exclusive
/// lock, so a UUID can never race into two different internal ids.
#[derive(Debug)]
pub struct IdentityResolver {
    inner: RwLock<RegistryInner>,
}

impl IdentityResolver {
    /// Create an empty resolver; dense allocation starts at 1
    pub fn new() -> Self {
        Self::with_next_id(1)
    }

    /// Create a resolver that allocates from a given id upward
    ///
    /// Used after recovery so fresh ids do not collide with ids already in
    /// the replayed state.
    pub fn with_next_id(next_id: u64) -> Self {
        IdentityResolver {
            inner: RwLock::new(RegistryInner {
                by_uuid: HashMap::new(),
                by_id: HashMap::new(),
                next_id: next_id.max(1),
            }),
        }
    }

    /// Resolve a UUID to its internal id
    ///
    /// # Errors
    ///
    /// Returns `UnknownUuid` if the UUID is not registered.
    pub fn get_id(&self, uuid: RecordUuid) -> Result<RecordId> {
        self.inner
            .read()
            .by_uuid
            .get(&uuid)
            .copied()
            .ok_or(Error::UnknownUuid { uuid })
    }

    /// Resolve an internal id to its UUID
    ///
    /// # Errors
    ///
    /// Returns `UnknownId` if the id is not registered.
    pub fn get_uuid(&self, id: RecordId) -> Result<RecordUuid> {
        self.inner
            .read()
            .by_id
            .get(&id)
            .copied()
            .ok_or(Error::UnknownId { id })
    }

    /// Resolve a UUID to its internal id, if registered
    pub fn try_get_id(&self, uuid: RecordUuid) -> Option<RecordId> {
        self.inner.read().by_uuid.get(&uuid).copied()
    }

    /// Resolve a UUID, registering a fresh dense id if unknown
    pub fn get_id_or_create(&self, uuid: RecordUuid) -> RecordId {
        let mut inner = self.inner.write();
        if let Some(id) = inner.by_uuid.get(&uuid) {
            return *id;
        }
        let id = inner.allocate();
        inner.register(id, uuid);
        debug!(target: "lattice::identity", %id, %uuid, "registered id for uuid");
        id
    }

    /// Resolve an internal id, registering a fresh UUID if unknown
    ///
    /// # Errors
    ///
    /// Returns `UnknownId` for the unset sentinel id.
    pub fn get_uuid_or_create(&self, id: RecordId) -> Result<RecordUuid> {
        if id.is_unset() {
            return Err(Error::UnknownId { id });
        }
        let mut inner = self.inner.write();
        if let Some(uuid) = inner.by_id.get(&id) {
            return Ok(*uuid);
        }
        let uuid = RecordUuid::new();
        inner.register(id, uuid);
        debug!(target: "lattice::identity", %id, %uuid, "registered uuid for id");
        Ok(uuid)
    }

    /// Allocate a fresh (id, uuid) pair for a record created with neither
    /// identity set
    pub fn mint(&self) -> (RecordId, RecordUuid) {
        let mut inner = self.inner.write();
        let id = inner.allocate();
        let uuid = RecordUuid::new();
        inner.register(id, uuid);
        debug!(target: "lattice::identity", %id, %uuid, "minted fresh identity");
        (id, uuid)
    }

    /// Check that a pair is already registered, consistently
    ///
    /// # Errors
    ///
    /// Returns `UnknownUuid` / `UnknownId` if either side is unregistered,
    /// `IdentityConflict` if the two sides are bound to different partners.
    pub fn validate_existence(&self, id: RecordId, uuid: RecordUuid) -> Result<()> {
        let inner = self.inner.read();
        let bound_id = *inner.by_uuid.get(&uuid).ok_or(Error::UnknownUuid { uuid })?;
        let bound_uuid = *inner.by_id.get(&id).ok_or(Error::UnknownId { id })?;
        if bound_id != id || bound_uuid != uuid {
            return Err(Error::IdentityConflict { id, uuid });
        }
        Ok(())
    }

    /// Accept a pair if unregistered or already matching; register if new
    ///
    /// # Errors
    ///
    /// Returns `UnknownId` for the unset sentinel id, `IdentityConflict` if
    /// either side is already bound to a different partner.
    pub fn validate_combination_and_register_if_new(
        &self,
        id: RecordId,
        uuid: RecordUuid,
    ) -> Result<()> {
        if id.is_unset() {
            return Err(Error::UnknownId { id });
        }
        let mut inner = self.inner.write();
        match (inner.by_uuid.get(&uuid).copied(), inner.by_id.get(&id).copied()) {
            (None, None) => {
                inner.register(id, uuid);
                debug!(target: "lattice::identity", %id, %uuid, "registered supplied pair");
                Ok(())
            }
            (Some(bound_id), Some(bound_uuid)) if bound_id == id && bound_uuid == uuid => Ok(()),
            _ => Err(Error::IdentityConflict { id, uuid }),
        }
    }

    /// Check whether a UUID is registered
    pub fn contains_uuid(&self, uuid: RecordUuid) -> bool {
        self.inner.read().by_uuid.contains_key(&uuid)
    }

    /// Check whether an internal id is registered
    pub fn contains_id(&self, id: RecordId) -> bool {
        self.inner.read().by_id.contains_key(&id)
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.inner.read().by_uuid.len()
    }

    /// Check whether no pairs are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}
