//! tilebot harness: runs levels through the kernel and the solver.
//!
//! The harness owns orchestration only. Movement rules live in
//! `tilebot_kernel`, solving lives in `tilebot_search`.
//!
//! - [`session::GameSession`] drives one level for a presentation layer
//!   through the [`contract::SessionObserver`] trait.
//! - [`runner::run_level`] solves and executes a level, packaging the
//!   result as a [`report::RunReportV1`].
//! - [`levels`] holds the built-in level files.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod levels;
pub mod logging;
pub mod report;
pub mod runner;
pub mod session;
