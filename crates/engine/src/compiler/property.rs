//! Property action expansion
//!
//! The selector resolves to a deduplicated id list (unknown records are
//! silently skipped). For each survivor a working copy is mutated in
//! memory, then rewritten through the force-update path with index work
//! scoped to the touched properties.

use super::Compiler;
use crate::action::{PropertyAction, PropertyOperation};
use crate::primitive::PrimitiveAction;
use lattice_core::{Error, PropertyId, Record, Result};
use std::collections::HashSet;
use tracing::debug;

impl<'a> Compiler<'a> {
    pub(crate) fn expand_property(&self, action: &PropertyAction) -> Result<Vec<PrimitiveAction>> {
        self.check_property_payload(action)?;
        let ids = self.resolve_selector(&action.selector)?;
        debug!(
            target: "lattice::txn",
            op = action.operation.name(),
            records = ids.len(),
            properties = action.properties.len(),
            "property patch"
        );

        let mut primitives = Vec::new();
        for id in ids {
            let old = self.store.get(id)?;
            let mut working = old.clone();
            let touched = self.apply_property_op(action, &mut working)?;

            // A record where nothing differed is left alone entirely.
            if action.operation == PropertyOperation::UpdateIfDifferent && touched.is_empty() {
                continue;
            }

            primitives.extend(self.force_update_scoped(old, working, &touched)?);
        }
        Ok(primitives)
    }

    fn check_property_payload(&self, action: &PropertyAction) -> Result<()> {
        if action.operation.carries_values() {
            if action.properties.len() != action.values.len() {
                return Err(Error::unsupported(format!(
                    "Property.{} carries {} properties but {} values",
                    action.operation.name(),
                    action.properties.len(),
                    action.values.len()
                )));
            }
        } else if !action.values.is_empty() {
            return Err(Error::unsupported(
                "Property.Reset carries property ids only",
            ));
        }
        Ok(())
    }

    /// Mutate the working copy per the operation; returns touched ids
    fn apply_property_op(
        &self,
        action: &PropertyAction,
        working: &mut Record,
    ) -> Result<Vec<PropertyId>> {
        let mut touched = Vec::new();
        match action.operation {
            PropertyOperation::Update => {
                for (property, value) in action.assignments() {
                    working.set_property(property, value.clone());
                    touched.push(property);
                }
            }
            PropertyOperation::UpdateIfDifferent => {
                for (property, value) in action.assignments() {
                    if working.property(property) != Some(value) {
                        working.set_property(property, value.clone());
                        touched.push(property);
                    }
                }
            }
            PropertyOperation::Reset => {
                for property in action.properties.iter().copied() {
                    if working.remove_property(property).is_some() {
                        touched.push(property);
                    }
                }
            }
            PropertyOperation::Add | PropertyOperation::Multiply => {
                let schema = self.catalog.type_schema(working.type_id)?;
                let multiply = action.operation == PropertyOperation::Multiply;
                for (property, operand) in action.assignments() {
                    let definition =
                        schema
                            .property(property)
                            .ok_or(Error::UnknownProperty {
                                property,
                                type_id: working.type_id,
                            })?;
                    let next = match working.property(property) {
                        Some(current) if multiply => {
                            self.arithmetic.multiply(definition, current, operand)?
                        }
                        Some(current) => self.arithmetic.add(definition, current, operand)?,
                        // Absent: the operand becomes the value directly.
                        None => operand.clone(),
                    };
                    working.set_property(property, next);
                    touched.push(property);
                }
            }
        }
        Ok(touched)
    }

    /// Rewrite one record through the force-update path, scoping index
    /// work to the touched properties
    ///
    /// Exclusions are the complement: every declared property NOT touched
    /// by this patch is known unaffected, so its indexes are left alone.
    fn force_update_scoped(
        &self,
        old: Record,
        working: Record,
        touched: &[PropertyId],
    ) -> Result<Vec<PrimitiveAction>> {
        let schema = self.catalog.type_schema(working.type_id)?;
        let excluded: HashSet<PropertyId> = schema
            .property_ids()
            .filter(|id| !touched.contains(id))
            .collect();
        self.update_existing(old, working, false, Some(&excluded))
    }
}
