//! Solver policy types.

use tilebot_kernel::proof::canon::{canonical_json_bytes, CanonError};
use tilebot_kernel::proof::hash::{canonical_hash, ContentHash};
use tilebot_kernel::proof::hash_domain::HashDomain;

use crate::error::PolicyError;

/// Capacities of the standard puzzle: root 12, two children of 8.
pub const STANDARD_CAPACITIES: [usize; 3] = [12, 8, 8];

/// Procedure capacities used by the optimizer and diagnostics.
///
/// Slot 0 is the root; slots 1 and 2 are the children reachable through
/// `CallP1` and `CallP2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverPolicyV1 {
    pub capacities: Vec<usize>,
}

impl SolverPolicyV1 {
    /// # Errors
    ///
    /// [`PolicyError::InvalidCapacities`] for an empty vector, a zero root
    /// capacity, or more than three slots.
    pub fn validate(&self) -> Result<(), PolicyError> {
        match self.capacities.as_slice() {
            [] => Err(PolicyError::InvalidCapacities {
                detail: "no slots".into(),
            }),
            [0, ..] => Err(PolicyError::InvalidCapacities {
                detail: "root capacity must be at least 1".into(),
            }),
            slots if slots.len() > STANDARD_CAPACITIES.len() => {
                Err(PolicyError::InvalidCapacities {
                    detail: format!("{} slots, at most 3 are callable", slots.len()),
                })
            }
            _ => Ok(()),
        }
    }

    /// Capacity of slot `index`; slots past the end hold nothing.
    #[must_use]
    pub fn capacity(&self, index: usize) -> usize {
        self.capacities.get(index).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "schema_version": "solver_policy.v1",
            "capacities": self.capacities,
        })
    }

    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SolverPolicy,
            &canonical_json_bytes(&self.to_json_value())?,
        ))
    }
}

impl Default for SolverPolicyV1 {
    fn default() -> Self {
        Self {
            capacities: STANDARD_CAPACITIES.to_vec(),
        }
    }
}
