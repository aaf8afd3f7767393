//! Property assertion evaluation
//!
//! Assertions read current values (or schema defaults) and check them
//! against the requirement. The first failing record aborts compilation;
//! assertions never contribute primitives.

use super::Compiler;
use crate::action::AssertionAction;
use lattice_core::{Error, Result, Value};
use tracing::debug;

impl<'a> Compiler<'a> {
    pub(crate) fn expand_assertion(&self, action: &AssertionAction) -> Result<()> {
        let ids = self.resolve_selector(&action.selector)?;
        debug!(
            target: "lattice::txn",
            requirement = action.requirement.name(),
            property = %action.property,
            records = ids.len(),
            "evaluating assertion"
        );

        for id in ids {
            let record = self.store.get(id)?;
            let schema = self.catalog.type_schema(record.type_id)?;
            let definition = schema
                .property(action.property)
                .ok_or(Error::UnknownProperty {
                    property: action.property,
                    type_id: record.type_id,
                })?;
            let current: Option<Value> = record
                .property(action.property)
                .cloned()
                .or_else(|| definition.default.clone());

            let holds = match &current {
                Some(value) => {
                    action
                        .requirement
                        .evaluate(value, &action.value)
                        .ok_or(Error::InvalidValue {
                            property: action.property,
                            expected: action.value.kind(),
                            actual: value.kind(),
                        })?
                }
                // Absent with no schema default: nothing to satisfy the
                // requirement with.
                None => false,
            };

            if !holds {
                return Err(Error::AssertionFailed {
                    id,
                    property: action.property,
                    requirement: action.requirement.name(),
                    expected: action.value.clone(),
                    actual: current,
                });
            }
        }
        Ok(())
    }
}
