//! Relation action expansion
//!
//! Add and Remove are one-primitive operations. Set enforces the relation's
//! cardinality by removing conflicting edges first. Clear removes every
//! edge matching a source/target pattern; membership is snapshotted before
//! any removal is emitted.

use super::Compiler;
use crate::action::{EndpointRef, RelationAction, RelationOperation};
use crate::primitive::PrimitiveAction;
use lattice_core::{Error, RecordId, RelationLink, Result, Timestamp};
use tracing::debug;

/// Resolved form of one Clear endpoint pattern
enum Bound {
    /// Wildcard: matches any record
    Any,
    /// Matches exactly this record
    At(RecordId),
    /// The endpoint named a UUID nobody holds; nothing can match
    Unmatched,
}

impl Bound {
    fn matches(&self, id: RecordId) -> bool {
        match self {
            Bound::Any => true,
            Bound::At(bound) => *bound == id,
            Bound::Unmatched => false,
        }
    }
}

impl<'a> Compiler<'a> {
    pub(crate) fn expand_relation(
        &self,
        action: &RelationAction,
        at: Timestamp,
    ) -> Result<Vec<PrimitiveAction>> {
        // Every operation requires a defined relation type.
        let schema = self.catalog.relation_schema(action.relation_type)?;
        let changed_at = action.changed_at.unwrap_or(at);

        match action.operation {
            RelationOperation::Add => {
                let (source, target) = self.resolve_pair(action)?;
                Ok(vec![PrimitiveAction::add_relation(RelationLink::new(
                    action.relation_type,
                    source,
                    target,
                    changed_at,
                ))])
            }
            RelationOperation::Remove => {
                let (source, target) = self.resolve_pair(action)?;
                Ok(vec![PrimitiveAction::remove_relation(RelationLink::new(
                    action.relation_type,
                    source,
                    target,
                    changed_at,
                ))])
            }
            RelationOperation::Set => {
                let (source, target) = self.resolve_pair(action)?;
                if self.catalog.holds(action.relation_type, source, target)? {
                    // Already exactly this pair: nothing to do.
                    return Ok(Vec::new());
                }
                let conflicts =
                    self.catalog
                        .conflicting_links(action.relation_type, source, target)?;
                debug!(
                    target: "lattice::txn",
                    relation = %action.relation_type,
                    conflicts = conflicts.len(),
                    "set displaces conflicting relations"
                );
                let mut primitives: Vec<PrimitiveAction> = conflicts
                    .into_iter()
                    .map(PrimitiveAction::remove_relation)
                    .collect();
                primitives.push(PrimitiveAction::add_relation(RelationLink::new(
                    action.relation_type,
                    source,
                    target,
                    changed_at,
                )));
                Ok(primitives)
            }
            RelationOperation::Clear => {
                let source = self.resolve_bound(&action.source)?;
                let target = self.resolve_bound(&action.target)?;
                // Snapshot membership before emitting; the edge set changes
                // as removals are applied downstream.
                let members = self.catalog.relation_members(action.relation_type)?;
                let matches = |link: &RelationLink| {
                    let direct = source.matches(link.source) && target.matches(link.target);
                    if schema.symmetric {
                        direct || (source.matches(link.target) && target.matches(link.source))
                    } else {
                        direct
                    }
                };
                Ok(members
                    .into_iter()
                    .filter(matches)
                    .map(PrimitiveAction::remove_relation)
                    .collect())
            }
        }
    }

    /// Resolve both endpoints of a non-Clear relation action
    fn resolve_pair(&self, action: &RelationAction) -> Result<(RecordId, RecordId)> {
        let source = self.resolve_endpoint(&action.source, action)?;
        let target = self.resolve_endpoint(&action.target, action)?;
        Ok((source, target))
    }

    fn resolve_endpoint(&self, endpoint: &EndpointRef, action: &RelationAction) -> Result<RecordId> {
        match endpoint {
            EndpointRef::Id(id) if !id.is_unset() => Ok(*id),
            EndpointRef::Uuid(uuid) => self.identity.get_id(*uuid),
            EndpointRef::Id(_) | EndpointRef::Unset => Err(Error::unsupported(format!(
                "Relation.{} requires both endpoints",
                action.operation.name()
            ))),
        }
    }

    /// Resolve one Clear endpoint pattern
    fn resolve_bound(&self, endpoint: &EndpointRef) -> Result<Bound> {
        match endpoint {
            EndpointRef::Unset => Ok(Bound::Any),
            EndpointRef::Id(id) if id.is_unset() => Ok(Bound::Any),
            EndpointRef::Id(id) => Ok(Bound::At(*id)),
            EndpointRef::Uuid(uuid) => Ok(match self.identity.try_get_id(*uuid) {
                Some(id) => Bound::At(id),
                None => Bound::Unmatched,
            }),
        }
    }
}
