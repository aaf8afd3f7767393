//! The action compiler
//!
//! Pure transformation from logical actions into primitive actions. The
//! compiler resolves identities, checks existence, diffs old vs new state
//! and expands cascades, but never writes: its only side effects are
//! identity registrations and index notifications, both explicitly outside
//! the durability boundary.
//!
//! ## Compilation sequence
//!
//! ```text
//! 1. check batch limits - oversized batches fail before anything runs
//! 2. for each action, in order:
//!    a. resolve identities (resolver may register new pairs)
//!    b. read currently-visible state (store, catalog)
//!    c. expand to zero or more primitives
//! 3. concatenate per-action expansions into one ordered list
//! 4. wrap into ExecutedTransaction with the batch timestamp
//! ```
//!
//! The whole list is materialized before anything is returned, so an error
//! at step 2 of action N means the caller receives nothing at all: the "no
//! durable effect yet" guarantee is structural.

mod assertion;
mod property;
mod record;
mod relation;

use crate::action::{MutationAction, RecordSelector};
use crate::batch::TransactionBatch;
use crate::error::{CompileError, CompileResult};
use crate::executed::ExecutedTransaction;
use crate::primitive::PrimitiveAction;
use lattice_core::{
    Catalog, IndexNotifier, Limits, RecordId, RecordValidator, Result, StoreRead, Timestamp,
    ValueArithmetic,
};
use lattice_identity::IdentityResolver;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Compiles transaction batches into primitive sequences
///
/// Borrows its collaborators for the lifetime of the compilation surface;
/// the store's outer write exclusion must be held by the caller for the
/// duration of every `compile` call.
pub struct Compiler<'a> {
    pub(crate) store: &'a dyn StoreRead,
    pub(crate) catalog: &'a dyn Catalog,
    pub(crate) identity: &'a IdentityResolver,
    pub(crate) validator: &'a dyn RecordValidator,
    pub(crate) arithmetic: &'a dyn ValueArithmetic,
    pub(crate) notifier: &'a dyn IndexNotifier,
    pub(crate) limits: Limits,
}

impl<'a> Compiler<'a> {
    /// Create a compiler with default limits
    pub fn new(
        store: &'a dyn StoreRead,
        catalog: &'a dyn Catalog,
        identity: &'a IdentityResolver,
        validator: &'a dyn RecordValidator,
        arithmetic: &'a dyn ValueArithmetic,
        notifier: &'a dyn IndexNotifier,
    ) -> Self {
        Compiler {
            store,
            catalog,
            identity,
            validator,
            arithmetic,
            notifier,
            limits: Limits::default(),
        }
    }

    /// Override the batch limits (builder style)
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Compile a batch into its executed-transaction record
    ///
    /// Walks the actions in order, expanding each into zero or more
    /// primitives. The full primitive list is materialized before this
    /// function returns; on any failure the caller receives a
    /// [`CompileError`] and no primitives, meaning no durable mutation has
    /// occurred. Identity registrations made along the way persist (see
    /// [`IdentityResolver`]).
    ///
    /// # Errors
    ///
    /// Returns `CompileError::Invalid` for batch-level violations and
    /// `CompileError::Rejected` naming the failing action otherwise.
    pub fn compile(&self, batch: &TransactionBatch) -> CompileResult<ExecutedTransaction> {
        debug!(
            target: "lattice::txn",
            actions = batch.actions.len(),
            at = %batch.timestamp,
            "compiling batch"
        );
        self.limits
            .check_batch_actions(batch.actions.len())
            .map_err(CompileError::invalid)?;

        let mut primitives = Vec::new();
        for (index, action) in batch.actions.iter().enumerate() {
            let expanded = self.expand(action, batch.timestamp).map_err(|source| {
                warn!(
                    target: "lattice::txn",
                    action = index,
                    kind = %action.describe(),
                    error = %source,
                    "batch rejected"
                );
                CompileError::rejected(index, source)
            })?;
            primitives.extend(expanded);
        }

        debug!(
            target: "lattice::txn",
            primitives = primitives.len(),
            "batch compiled"
        );
        Ok(ExecutedTransaction::new(primitives, batch.timestamp))
    }

    fn expand(&self, action: &MutationAction, at: Timestamp) -> Result<Vec<PrimitiveAction>> {
        match action {
            MutationAction::Record(a) => self.expand_record(a, at),
            MutationAction::Relation(a) => self.expand_relation(a, at),
            MutationAction::Property(a) => self.expand_property(a),
            MutationAction::Assertion(a) => self.expand_assertion(a).map(|()| Vec::new()),
        }
    }

    /// Resolve a selector to a deduplicated list of existing internal ids
    ///
    /// Unknown UUIDs and ids without a stored record are silently skipped;
    /// order of first occurrence is preserved.
    pub(crate) fn resolve_selector(&self, selector: &RecordSelector) -> Result<Vec<RecordId>> {
        let candidates: Vec<RecordId> = match selector {
            RecordSelector::Ids(ids) => ids.clone(),
            RecordSelector::Uuids(uuids) => uuids
                .iter()
                .filter_map(|uuid| self.identity.try_get_id(*uuid))
                .collect(),
            RecordSelector::OfType(type_id) => self.catalog.ids_of_type(*type_id)?,
        };

        let mut seen = HashSet::new();
        let mut resolved = Vec::new();
        for id in candidates {
            if id.is_unset() || !seen.insert(id) {
                continue;
            }
            if self.store.contains(id)? {
                resolved.push(id);
            }
        }
        self.limits.check_selector_fanout(resolved.len())?;
        Ok(resolved)
    }
}
