//! Program module: instructions and procedures.
//!
//! Depends on `board` for directions. `exec` interprets these; the search
//! crate produces them.

pub mod instruction;
pub mod procedure;

pub use instruction::{turns_between, Instruction};
pub use procedure::{contains_illegal_recursion, exit_count, verify, Procedure, ProcedureId};
