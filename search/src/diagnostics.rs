//! Board diagnostics: structural checks plus the capacity check.
//!
//! `analyze` never fails. An empty list means the board is solvable and its
//! reference solution fits the capacities.

use tracing::{debug, instrument};

use tilebot_kernel::board::reach::{structural_problems, Problem, ProblemKind};
use tilebot_kernel::board::{Board, TileKind};

use crate::policy::SolverPolicyV1;
use crate::solve::solve_with_policy;

/// Diagnose `board` against the standard capacities.
#[must_use]
pub fn analyze(board: &Board) -> Vec<Problem> {
    analyze_with_policy(board, &SolverPolicyV1::default())
}

/// Diagnose `board` against `policy`.
///
/// Structural problems come first (door count, start count, unreachable
/// door and coins). Only a structurally clean board is solved; a solution
/// that does not fit, or a solve that fails, is `SolutionTooBig` on the
/// start tile.
#[must_use]
#[instrument(level = "debug", skip_all)]
pub fn analyze_with_policy(board: &Board, policy: &SolverPolicyV1) -> Vec<Problem> {
    let mut problems = structural_problems(board);
    if !problems.is_empty() {
        debug!(count = problems.len(), "structural problems");
        return problems;
    }

    let fits = match solve_with_policy(&board.clone(), policy) {
        Ok(solution) => solution.fits(policy),
        Err(err) => {
            debug!(%err, "solve failed during diagnostics");
            false
        }
    };
    if !fits {
        problems.push(Problem::new(
            ProblemKind::SolutionTooBig,
            TileKind::Start,
            None,
        ));
    }
    problems
}
