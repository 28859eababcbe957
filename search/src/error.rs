//! Typed solver errors.
//!
//! `analyze` never fails; it reports problems as data. Everything here is
//! either caller misuse (solving a board with problems, feeding call markers
//! to the optimizer, a bad policy) or a planner invariant that must never
//! break on a board that passed diagnostics.

use tilebot_kernel::board::reach::Problem;
use tilebot_kernel::program::Instruction;

/// Typed failure for the procedure optimizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizeError {
    /// The raw instruction list already contains a call marker.
    RecursionMarkerInInput {
        index: usize,
        instruction: Instruction,
    },
    /// The capacity vector is empty.
    NoCapacities,
    /// More slots than the root plus the two callable children.
    TooManyCapacities { count: usize },
}

impl std::fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecursionMarkerInInput { index, instruction } => write!(
                f,
                "raw instructions must not contain call markers: {instruction} at {index}"
            ),
            Self::NoCapacities => write!(f, "at least one procedure capacity is required"),
            Self::TooManyCapacities { count } => {
                write!(f, "at most 3 procedure capacities are supported, got {count}")
            }
        }
    }
}

impl std::error::Error for OptimizeError {}

/// Typed failure for solver policy validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    InvalidCapacities { detail: String },
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCapacities { detail } => {
                write!(f, "invalid procedure capacities: {detail}")
            }
        }
    }
}

impl std::error::Error for PolicyError {}

/// Typed failure for planning and solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The board has structural problems; run diagnostics first.
    BoardHasProblems { problems: Vec<Problem> },
    /// The planner produced a path it cannot lower. Fatal.
    PlannerInvariant { detail: String },
    Optimize(OptimizeError),
    Policy(PolicyError),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BoardHasProblems { problems } => {
                write!(f, "board has {} problem(s)", problems.len())?;
                if let Some(first) = problems.first() {
                    write!(f, ", first: {first}")?;
                }
                Ok(())
            }
            Self::PlannerInvariant { detail } => {
                write!(f, "planner invariant violated: {detail}")
            }
            Self::Optimize(err) => write!(f, "optimizer rejected input: {err}"),
            Self::Policy(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Optimize(err) => Some(err),
            Self::Policy(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OptimizeError> for SolveError {
    fn from(err: OptimizeError) -> Self {
        Self::Optimize(err)
    }
}

impl From<PolicyError> for SolveError {
    fn from(err: PolicyError) -> Self {
        Self::Policy(err)
    }
}
