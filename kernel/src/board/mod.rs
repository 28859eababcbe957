//! Board module: tiles, directions, the grid itself, and reachability.
//!
//! Depends on nothing internal. `exec` and `level` build on top of it.

pub mod direction;
pub mod grid;
pub mod reach;
pub mod tile;

pub use direction::{Direction, Position};
pub use grid::{Board, BoardError};
pub use tile::TileKind;
