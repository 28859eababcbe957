//! tilebot search: reference solutions for tile-bot boards.
//!
//! Depends only on `tilebot_kernel`; it does NOT depend on
//! `tilebot_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! tilebot_kernel  ←  tilebot_search  ←  tilebot_harness
//! (board, exec)      (plan, optimize)    (session, report, CLI)
//! ```
//!
//! # Pipeline
//!
//! [`graph::BoardGraph`] → [`dijkstra::shortest_paths`] →
//! [`planner::plan`] → [`optimizer::optimize`] → [`solve::Solution`].
//! [`diagnostics::analyze`] runs the same pipeline to check capacities.

#![forbid(unsafe_code)]

pub mod diagnostics;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod optimizer;
pub mod planner;
pub mod policy;
pub mod solve;

pub use diagnostics::analyze;
pub use error::{OptimizeError, PolicyError, SolveError};
pub use optimizer::{optimize, OptimizeWarning, Optimized};
pub use policy::SolverPolicyV1;
pub use solve::{solve, solve_with_policy, Solution};
