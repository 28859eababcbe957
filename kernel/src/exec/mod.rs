//! Exec module: the bot stepper and the procedure interpreter.
//!
//! Depends on `board` and `program`. Gameplay failures (walls, abysses, a
//! failed exit) are [`action::Action`]s in the log, never errors. Only the
//! static legality checks and misuse of call markers produce [`ExecError`].

pub mod action;
pub mod bot;
pub mod error;
pub mod interpreter;

pub use action::{Action, ActionKind, ActionLog};
pub use bot::Bot;
pub use error::ExecError;
pub use interpreter::execute;
