//! Board shorthand for tests.
//!
//! One character per tile: `S` start, `.` normal, `#` wall, `_` abyss,
//! `c` coin, `D` door.

use tilebot_kernel::board::{Board, Direction, TileKind};
use tilebot_kernel::program::{Instruction, Procedure, ProcedureId};

/// Build a board from rows of tile characters.
///
/// # Panics
///
/// Panics on an unknown character or a board `Board::new` rejects. Test
/// fixtures only.
#[must_use]
pub fn board(rows: &[&str], facing: Direction) -> Board {
    let tiles = rows
        .iter()
        .map(|row| row.chars().map(tile).collect())
        .collect();
    Board::new(tiles, facing).unwrap_or_else(|e| panic!("bad test board {rows:?}: {e}"))
}

fn tile(c: char) -> TileKind {
    match c {
        'S' => TileKind::Start,
        '.' => TileKind::Normal,
        '#' => TileKind::Wall,
        '_' => TileKind::Abyss,
        'c' => TileKind::Coin,
        'D' => TileKind::Door,
        other => panic!("unknown tile character {other:?}"),
    }
}

/// Root plus two empty children.
#[must_use]
pub fn root_only(code: &[Instruction]) -> [Procedure; 3] {
    procedures(code, &[], &[])
}

#[must_use]
pub fn procedures(root: &[Instruction], p1: &[Instruction], p2: &[Instruction]) -> [Procedure; 3] {
    [
        Procedure::new(ProcedureId::Root, root.to_vec()),
        Procedure::new(ProcedureId::P1, p1.to_vec()),
        Procedure::new(ProcedureId::P2, p2.to_vec()),
    ]
}

/// Structurally clean boards: corridors, turns, a jump, several coins, a
/// door crossed on the way to a coin, and a long repetitive staircase.
#[must_use]
pub fn solvable_corpus() -> Vec<(&'static str, Board)> {
    vec![
        ("corridor", board(&["S...D"], Direction::East)),
        ("facing_away", board(&["S...D"], Direction::West)),
        ("corner", board(&["S..", "##.", "##D"], Direction::East)),
        ("jump", board(&["S._.D"], Direction::East)),
        (
            "coins",
            board(&["c.S.c", "####.", "D...."], Direction::North),
        ),
        (
            "door_on_the_way",
            board(
                &["S....", "####.", "c..#.", ".#D#.", ".#...", "....."],
                Direction::South,
            ),
        ),
        (
            "staircase",
            board(
                &[
                    "S.######", "#..#####", "##..####", "###..###", "####..##", "#####..#",
                    "######.D",
                ],
                Direction::East,
            ),
        ),
    ]
}
