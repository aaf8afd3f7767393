//! Record action expansion
//!
//! Implements the record operation table: identity handling, existence
//! checks and primitive emission per operation. Shared workers:
//!
//! - `emit_insert`: validate, default-fill, notify, Add
//! - `update_existing`: preserve identity and creation time, validate
//!   against old state, optionally diff, Remove(old) + Add(new)
//! - `delete_cascading`: snapshot incident relations, Remove each, then
//!   Remove the record

use super::Compiler;
use crate::primitive::PrimitiveAction;
use lattice_core::{Error, PropertyId, Record, Result, Timestamp};
use std::collections::HashSet;
use tracing::debug;

use crate::action::{RecordAction, RecordOperation};

impl<'a> Compiler<'a> {
    pub(crate) fn expand_record(
        &self,
        action: &RecordAction,
        at: Timestamp,
    ) -> Result<Vec<PrimitiveAction>> {
        let record = action.record.clone();
        match action.operation {
            RecordOperation::InsertOrFail => self.insert(record, at, false),
            RecordOperation::InsertIfNotExists => self.insert(record, at, true),
            RecordOperation::DeleteOrFail => self.delete(record, false),
            RecordOperation::DeleteIfExists => self.delete(record, true),
            RecordOperation::UpdateOrFail => self.update(record),
            RecordOperation::UpdateIfExists => self.update_if_exists(record),
            RecordOperation::ForceUpdate => self.update(record),
            RecordOperation::Upsert => self.upsert(record, at, true),
            RecordOperation::ForceUpsert => self.upsert(record, at, false),
            RecordOperation::ChangeType => self.change_type(record),
            RecordOperation::ReIndex => self.reindex(record),
        }
    }

    // =========================================================================
    // Identity resolution
    // =========================================================================

    /// Resolve both identities, creating whichever sides are missing
    fn resolve_or_create(&self, record: &mut Record) -> Result<()> {
        match (record.id.is_unset(), record.uuid) {
            (true, None) => {
                let (id, uuid) = self.identity.mint();
                record.id = id;
                record.uuid = Some(uuid);
            }
            (true, Some(uuid)) => record.id = self.identity.get_id_or_create(uuid),
            (false, None) => record.uuid = Some(self.identity.get_uuid_or_create(record.id)?),
            (false, Some(uuid)) => self
                .identity
                .validate_combination_and_register_if_new(record.id, uuid)?,
        }
        Ok(())
    }

    /// Resolve both identities; every supplied side must already be
    /// registered
    fn resolve_required(&self, record: &mut Record) -> Result<()> {
        match (record.id.is_unset(), record.uuid) {
            (true, None) => Err(Error::MissingIdentity),
            (true, Some(uuid)) => {
                record.id = self.identity.get_id(uuid)?;
                Ok(())
            }
            (false, None) => {
                record.uuid = Some(self.identity.get_uuid(record.id)?);
                Ok(())
            }
            (false, Some(uuid)) => self.identity.validate_existence(record.id, uuid),
        }
    }

    /// Resolve both identities, tolerating an unregistered record
    ///
    /// Returns false when the record cannot exist (its identity was never
    /// registered). Conflicting pairings still fail: tolerance covers
    /// absence, not inconsistency.
    fn resolve_tolerant(&self, record: &mut Record) -> Result<bool> {
        match (record.id.is_unset(), record.uuid) {
            (true, None) => Err(Error::MissingIdentity),
            (true, Some(uuid)) => match self.identity.try_get_id(uuid) {
                Some(id) => {
                    record.id = id;
                    Ok(true)
                }
                None => Ok(false),
            },
            (false, None) => {
                if self.identity.contains_id(record.id) {
                    record.uuid = Some(self.identity.get_uuid(record.id)?);
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            (false, Some(uuid)) => match self.identity.try_get_id(uuid) {
                Some(bound) if bound == record.id => Ok(true),
                Some(_) => Err(Error::IdentityConflict {
                    id: record.id,
                    uuid,
                }),
                None if self.identity.contains_id(record.id) => Err(Error::IdentityConflict {
                    id: record.id,
                    uuid,
                }),
                None => Ok(false),
            },
        }
    }

    // =========================================================================
    // Insert family
    // =========================================================================

    fn insert(
        &self,
        mut record: Record,
        at: Timestamp,
        skip_if_exists: bool,
    ) -> Result<Vec<PrimitiveAction>> {
        self.resolve_or_create(&mut record)?;
        if skip_if_exists && self.store.contains(record.id)? {
            debug!(target: "lattice::txn", id = %record.id, "insert skipped, record exists");
            return Ok(Vec::new());
        }
        self.emit_insert(record, at)
    }

    fn emit_insert(&self, mut record: Record, at: Timestamp) -> Result<Vec<PrimitiveAction>> {
        let schema = self.catalog.type_schema(record.type_id)?;
        if record.created_at.is_none() {
            record.created_at = Some(at);
        }
        let record = self
            .validator
            .validate_and_fill_defaults(&schema, record, None)?;
        self.limits.check_record_properties(record.property_count())?;
        // Every property of a fresh record counts as newly set.
        self.notifier.ensure_or_queue_index(&record, None)?;
        Ok(vec![PrimitiveAction::add_record(record)])
    }

    // =========================================================================
    // Delete family
    // =========================================================================

    fn delete(&self, mut record: Record, tolerate_missing: bool) -> Result<Vec<PrimitiveAction>> {
        if tolerate_missing {
            if !self.resolve_tolerant(&mut record)? {
                return Ok(Vec::new());
            }
        } else {
            self.resolve_required(&mut record)?;
        }
        if !self.store.contains(record.id)? {
            if tolerate_missing {
                return Ok(Vec::new());
            }
            return Err(Error::RecordNotFound { id: record.id });
        }
        self.delete_cascading(record.id)
    }

    fn delete_cascading(&self, id: lattice_core::RecordId) -> Result<Vec<PrimitiveAction>> {
        let old = self.store.get(id)?;
        // Snapshot incident edges into an owned list before emitting:
        // membership changes as the removals are applied downstream.
        let links = self.store.relations_with(id)?;
        debug!(
            target: "lattice::txn",
            id = %id,
            relations = links.len(),
            "delete cascades over incident relations"
        );
        let mut primitives: Vec<PrimitiveAction> = links
            .into_iter()
            .map(PrimitiveAction::remove_relation)
            .collect();
        primitives.push(PrimitiveAction::remove_record(old));
        Ok(primitives)
    }

    // =========================================================================
    // Update family
    // =========================================================================

    fn update(&self, mut record: Record) -> Result<Vec<PrimitiveAction>> {
        self.resolve_required(&mut record)?;
        if !self.store.contains(record.id)? {
            return Err(Error::RecordNotFound { id: record.id });
        }
        let old = self.store.get(record.id)?;
        self.update_existing(old, record, false, None)
    }

    fn update_if_exists(&self, mut record: Record) -> Result<Vec<PrimitiveAction>> {
        if !self.resolve_tolerant(&mut record)? {
            return Ok(Vec::new());
        }
        if !self.store.contains(record.id)? {
            return Ok(Vec::new());
        }
        let old = self.store.get(record.id)?;
        self.update_existing(old, record, true, None)
    }

    fn upsert(&self, mut record: Record, at: Timestamp, diff: bool) -> Result<Vec<PrimitiveAction>> {
        self.resolve_or_create(&mut record)?;
        if self.store.contains(record.id)? {
            let old = self.store.get(record.id)?;
            self.update_existing(old, record, diff, None)
        } else {
            self.emit_insert(record, at)
        }
    }

    /// Shared rewrite worker for the update family
    ///
    /// Identity and creation time always come from the stored state; the
    /// incoming snapshot only contributes type and properties. With `diff`
    /// set, identical states (ignoring generated properties) expand to
    /// nothing.
    pub(crate) fn update_existing(
        &self,
        old: Record,
        incoming: Record,
        diff: bool,
        excluded: Option<&HashSet<PropertyId>>,
    ) -> Result<Vec<PrimitiveAction>> {
        let schema = self.catalog.type_schema(incoming.type_id)?;
        let mut new = incoming;
        new.id = old.id;
        new.uuid = old.uuid;
        new.created_at = old.created_at;
        let new = self
            .validator
            .validate_and_fill_defaults(&schema, new, Some(&old))?;
        self.limits.check_record_properties(new.property_count())?;

        if diff && !self.validator.differ_ignoring_generated(&schema, &new, &old) {
            return Ok(Vec::new());
        }

        self.notifier.ensure_or_queue_index(&new, excluded)?;
        Ok(vec![
            PrimitiveAction::remove_record(old),
            PrimitiveAction::add_record(new),
        ])
    }

    // =========================================================================
    // ChangeType / ReIndex
    // =========================================================================

    fn change_type(&self, mut record: Record) -> Result<Vec<PrimitiveAction>> {
        self.resolve_required(&mut record)?;
        if !self.store.contains(record.id)? {
            return Err(Error::RecordNotFound { id: record.id });
        }
        let old = self.store.get(record.id)?;
        if old.type_id == record.type_id {
            return Err(Error::unsupported(format!(
                "ChangeType to the record's current type {}",
                record.type_id
            )));
        }
        // The incoming snapshot carries the NEW type; validation against
        // the new schema fills fields the old type never had.
        self.update_existing(old, record, false, None)
    }

    fn reindex(&self, mut record: Record) -> Result<Vec<PrimitiveAction>> {
        self.resolve_required(&mut record)?;
        if !self.store.contains(record.id)? {
            return Err(Error::RecordNotFound { id: record.id });
        }
        let stored = self.store.get(record.id)?;
        self.notifier.queue_indexing(stored.id, stored.type_id, None)?;
        Ok(Vec::new())
    }
}
