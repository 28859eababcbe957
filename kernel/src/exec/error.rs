use crate::program::Instruction;

/// Typed failure for procedure execution.
///
/// All variants are raised before the first action is produced, except
/// [`ExecError::CallOutsideProcedure`], which only the single-instruction
/// stepper returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// A child calls itself, or the two children call each other.
    IllegalRecursion,
    /// The three procedures together do not hold exactly one `Exit`.
    ExitCount { found: usize },
    /// A call marker was handed to the single-instruction stepper.
    CallOutsideProcedure { instruction: Instruction },
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalRecursion => {
                write!(f, "child procedures contain illegal recursion")
            }
            Self::ExitCount { found } => {
                write!(f, "expected exactly one exit across all procedures, found {found}")
            }
            Self::CallOutsideProcedure { instruction } => {
                write!(f, "{instruction} can only run inside a procedure")
            }
        }
    }
}

impl std::error::Error for ExecError {}
