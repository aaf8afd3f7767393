//! Property assertion actions
//!
//! An assertion validates an invariant over current property values before
//! the batch may commit. Assertions never produce primitives: they either
//! pass silently or abort compilation with an error naming the offending
//! record and property.

use crate::action::property::RecordSelector;
use lattice_core::{PropertyId, Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Comparison required to hold between current value and comparison value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    /// current == value
    Equal,
    /// current != value
    NotEqual,
    /// current < value
    Less,
    /// current <= value
    LessOrEqual,
    /// current > value
    Greater,
    /// current >= value
    GreaterOrEqual,
}

impl Requirement {
    /// Requirement name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Requirement::Equal => "Equal",
            Requirement::NotEqual => "NotEqual",
            Requirement::Less => "Less",
            Requirement::LessOrEqual => "LessOrEqual",
            Requirement::Greater => "Greater",
            Requirement::GreaterOrEqual => "GreaterOrEqual",
        }
    }

    /// Evaluate the requirement over two values
    ///
    /// Returns `None` when the values cannot be compared: ordering
    /// requirements over different kinds, or a Float comparison involving
    /// NaN. Equality requirements always evaluate (cross-kind values are
    /// simply unequal).
    pub fn evaluate(&self, current: &Value, value: &Value) -> Option<bool> {
        match self {
            Requirement::Equal => Some(current == value),
            Requirement::NotEqual => Some(current != value),
            Requirement::Less => Some(current.partial_cmp_typed(value)? == Ordering::Less),
            Requirement::LessOrEqual => Some(current.partial_cmp_typed(value)? != Ordering::Greater),
            Requirement::Greater => Some(current.partial_cmp_typed(value)? == Ordering::Greater),
            Requirement::GreaterOrEqual => {
                Some(current.partial_cmp_typed(value)? != Ordering::Less)
            }
        }
    }
}

/// One property assertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionAction {
    /// Comparison that must hold
    pub requirement: Requirement,
    /// Which records to check
    pub selector: RecordSelector,
    /// Property to read
    pub property: PropertyId,
    /// Comparison value
    pub value: Value,
}

impl AssertionAction {
    /// Create an assertion
    pub fn new(
        requirement: Requirement,
        selector: RecordSelector,
        property: PropertyId,
        value: impl Into<Value>,
    ) -> Self {
        AssertionAction {
            requirement,
            selector,
            property,
            value: value.into(),
        }
    }
}
