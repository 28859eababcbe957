//! Shared helpers for tilebot benchmark suites.
//!
//! Boards are generated deterministically so numbers stay comparable
//! across machines and runs.

use tilebot_harness::levels;
use tilebot_kernel::board::{Board, Direction, TileKind};
use tilebot_kernel::level::{encode_level, Level};
use tilebot_kernel::program::Instruction;
use tilebot_kernel::proof::hash::{canonical_hash, ContentHash};
use tilebot_kernel::proof::hash_domain::HashDomain;
use tilebot_search::planner::plan;

/// A named benchmark input.
pub struct BenchCase {
    pub name: String,
    pub board: Board,
}

/// The built-in levels as benchmark cases.
///
/// # Panics
///
/// Panics if a built-in level fails to decode. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn builtin_cases() -> Vec<BenchCase> {
    levels::all()
        .expect("built-in levels decode")
        .into_iter()
        .map(|(name, level)| BenchCase {
            name: name.to_string(),
            board: level.board(),
        })
        .collect()
}

/// A serpentine corridor `width` wide and `rows` tall (`rows` odd, at least
/// 3). Odd rows are walls with one gap, alternating sides, so the only
/// route zig-zags across the whole board. A coin sits in the middle of every
/// even row after the first.
///
/// # Panics
///
/// Panics for `width < 2` or an even `rows`; the generator has no sensible
/// layout for those.
#[must_use]
pub fn serpentine(width: usize, rows: usize) -> Board {
    assert!(width >= 2 && rows >= 3 && rows % 2 == 1, "bad serpentine shape");
    let mut grid = Vec::with_capacity(rows);
    for y in 0..rows {
        let row: Vec<TileKind> = (0..width)
            .map(|x| match y % 4 {
                1 if x + 1 == width => TileKind::Normal,
                3 if x == 0 => TileKind::Normal,
                1 | 3 => TileKind::Wall,
                _ if y > 0 && x == width / 2 => TileKind::Coin,
                _ => TileKind::Normal,
            })
            .collect();
        grid.push(row);
    }
    grid[0][0] = TileKind::Start;
    let last = rows - 1;
    let door_x = if (last / 2) % 2 == 0 { width - 1 } else { 0 };
    grid[last][door_x] = TileKind::Door;
    Board::new(grid, Direction::East).expect("serpentine board is valid")
}

/// An open `size`×`size` field: start top-left, door bottom-right, coins on
/// every third tile of the anti-diagonal.
///
/// # Panics
///
/// Panics for `size < 3`.
#[must_use]
pub fn open_field(size: usize) -> Board {
    assert!(size >= 3, "field too small");
    let mut grid = vec![vec![TileKind::Normal; size]; size];
    for i in (1..size - 1).step_by(3) {
        grid[i][size - 1 - i] = TileKind::Coin;
    }
    grid[0][0] = TileKind::Start;
    grid[size - 1][size - 1] = TileKind::Door;
    Board::new(grid, Direction::East).expect("open field is valid")
}

/// Identity of a benchmark input: hash of its canonical level encoding.
///
/// # Panics
///
/// Panics if the level cannot be canonicalized.
#[must_use]
pub fn input_digest(board: &Board) -> ContentHash {
    let bytes = encode_level(&Level::new(None, board.clone())).expect("encode level");
    canonical_hash(HashDomain::BenchInput, &bytes)
}

/// Planner output for `board`.
///
/// # Panics
///
/// Panics if the board cannot be planned.
#[must_use]
pub fn raw_route(board: &Board) -> Vec<Instruction> {
    plan(board).expect("benchmark board is solvable")
}
