//! `solve`: plan, optimize, and pad to the three standard procedures.

use tracing::{debug, instrument};

use tilebot_kernel::board::Board;
use tilebot_kernel::program::{Instruction, Procedure, ProcedureId};
use tilebot_kernel::proof::canon::{canonical_json_bytes, CanonError};
use tilebot_kernel::proof::hash::{canonical_hash, ContentHash};
use tilebot_kernel::proof::hash_domain::HashDomain;

use crate::error::SolveError;
use crate::optimizer::{optimize, OptimizeWarning};
use crate::planner::plan;
use crate::policy::SolverPolicyV1;

/// Reference solution: root plus two children, always all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub root: Procedure,
    pub p1: Procedure,
    pub p2: Procedure,
    /// The planner's unoptimized instructions.
    pub raw: Vec<Instruction>,
    pub warnings: Vec<OptimizeWarning>,
}

impl Solution {
    #[must_use]
    pub fn procedures(&self) -> [&Procedure; 3] {
        [&self.root, &self.p1, &self.p2]
    }

    #[must_use]
    pub fn total_len(&self) -> usize {
        self.procedures().iter().map(|p| p.len()).sum()
    }

    /// Whether every procedure fits its slot in `policy`.
    #[must_use]
    pub fn fits(&self, policy: &SolverPolicyV1) -> bool {
        self.procedures()
            .iter()
            .enumerate()
            .all(|(slot, p)| p.len() <= policy.capacity(slot))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "root": self.root.to_json_value(),
            "p1": self.p1.to_json_value(),
            "p2": self.p2.to_json_value(),
        })
    }

    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::Solution,
            &canonical_json_bytes(&self.to_json_value())?,
        ))
    }
}

/// Solve with the standard capacities.
///
/// # Errors
///
/// See [`solve_with_policy`].
pub fn solve(board: &Board) -> Result<Solution, SolveError> {
    solve_with_policy(board, &SolverPolicyV1::default())
}

/// Plan a route for `board` and fold it into procedures.
///
/// The result may exceed the policy's root capacity; that is reported in
/// [`Solution::warnings`], not as an error.
///
/// # Errors
///
/// - [`SolveError::Policy`] for an invalid policy.
/// - [`SolveError::BoardHasProblems`] / [`SolveError::PlannerInvariant`]
///   from the planner.
/// - [`SolveError::Optimize`] from the optimizer.
#[instrument(level = "debug", skip_all)]
pub fn solve_with_policy(board: &Board, policy: &SolverPolicyV1) -> Result<Solution, SolveError> {
    policy.validate()?;
    let raw = plan(board)?;
    let optimized = optimize(&raw, &policy.capacities)?;

    let mut slots = optimized.procedures.into_iter();
    let mut take = |id: ProcedureId| {
        slots
            .next()
            .map_or_else(|| Procedure::empty(id), |p| Procedure::new(id, p.instructions().to_vec()))
    };
    let solution = Solution {
        root: take(ProcedureId::Root),
        p1: take(ProcedureId::P1),
        p2: take(ProcedureId::P2),
        raw,
        warnings: optimized.warnings,
    };
    debug!(
        raw = solution.raw.len(),
        root = solution.root.len(),
        p1 = solution.p1.len(),
        p2 = solution.p2.len(),
        "solved"
    );
    Ok(solution)
}
