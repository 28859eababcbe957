//! tilebot kernel: the deterministic core of the tile-bot puzzle.
//!
//! # API Surface
//!
//! - [`level::decode_level`] -- decode level JSON into a [`board::Board`]
//! - [`exec::interpreter::execute`] -- run root + two child procedures, producing an action log
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 over canonical bytes
//!
//! # Module Dependency Direction
//!
//! `board` ← `program` ← `exec`, `board` ← `level`, and `proof` depends on
//! nothing internal.
//!
//! One-way only. No cycles. Solving lives one crate up (`tilebot-search`).

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod exec;
pub mod level;
pub mod program;
pub mod proof;
