//! Size limits for mutation batches
//!
//! This module defines configurable size limits enforced by the compiler
//! before any expansion work starts. Violations result in
//! [`Error::LimitExceeded`](crate::error::Error::LimitExceeded).
//!
//! The defaults are frozen; custom limits can be supplied when the compiler
//! is constructed.

use crate::error::{Error, Result};

/// Size limits for mutation batches
///
/// Enforced up front so that an oversized batch fails before the identity
/// resolver is touched.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum logical actions per batch (default: 10,000)
    pub max_batch_actions: usize,

    /// Maximum properties on one record (default: 4,096)
    pub max_record_properties: usize,

    /// Maximum records a selector may resolve to (default: 100,000)
    pub max_selector_fanout: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_batch_actions: 10_000,
            max_record_properties: 4_096,
            max_selector_fanout: 100_000,
        }
    }
}

impl Limits {
    /// Check a batch's action count
    pub fn check_batch_actions(&self, actual: usize) -> Result<()> {
        if actual > self.max_batch_actions {
            return Err(Error::LimitExceeded {
                what: "actions per batch",
                limit: self.max_batch_actions,
                actual,
            });
        }
        Ok(())
    }

    /// Check a record's property count
    pub fn check_record_properties(&self, actual: usize) -> Result<()> {
        if actual > self.max_record_properties {
            return Err(Error::LimitExceeded {
                what: "properties per record",
                limit: self.max_record_properties,
                actual,
            });
        }
        Ok(())
    }

    /// Check a selector's resolved fan-out
    pub fn check_selector_fanout(&self, actual: usize) -> Result<()> {
        if actual > self.max_selector_fanout {
            return Err(Error::LimitExceeded {
                what: "records per selector",
                limit: self.max_selector_fanout,
                actual,
            });
        }
        Ok(())
    }
}
