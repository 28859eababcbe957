//! Structural board checks and reachability flood fill.
//!
//! These are the parts of board diagnostics that need nothing but the
//! grid. The solve-based capacity check lives in `tilebot-search`.

use crate::board::direction::{Direction, Position};
use crate::board::grid::Board;
use crate::board::tile::{is_jumpable, is_walkable, TileKind};

/// Neighbour order used by every traversal over the board.
///
/// Fixed so that flood fill, graph construction and search agree.
pub const NEIGHBOUR_ORDER: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
];

/// What is wrong with a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProblemKind {
    /// A required tile kind is absent.
    DoesNotExist,
    /// A tile kind that must be unique occurs more than once.
    TooMany,
    /// The tile cannot be reached from the start tile.
    NotReachable,
    /// The reference solution does not fit the procedure capacities.
    SolutionTooBig,
}

impl ProblemKind {
    /// Stable snake-case name used in JSON artifacts and CLI output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DoesNotExist => "does_not_exist",
            Self::TooMany => "too_many",
            Self::NotReachable => "not_reachable",
            Self::SolutionTooBig => "solution_too_big",
        }
    }
}

/// A single diagnosed problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub kind: ProblemKind,
    /// The tile kind the problem is about.
    pub tile: TileKind,
    /// Where, if the problem is position-specific.
    pub position: Option<Position>,
}

impl Problem {
    #[must_use]
    pub const fn new(kind: ProblemKind, tile: TileKind, position: Option<Position>) -> Self {
        Self {
            kind,
            tile,
            position,
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} {} at {pos}", self.kind.name(), self.tile),
            None => write!(f, "{} {}", self.kind.name(), self.tile),
        }
    }
}

/// The tile a jump from `from` in `direction` lands on, if the jump is legal
/// on this grid.
///
/// Legal means: the tile in between is jumpable and the landing tile is
/// walkable. The door is walkable, so a jump may land on it.
#[must_use]
pub fn jump_landing(board: &Board, from: Position, direction: Direction) -> Option<Position> {
    let over = from.offset(direction, 1);
    let landing = from.offset(direction, 2);
    (is_jumpable(board.get(over)) && is_walkable(board.get(landing))).then_some(landing)
}

/// Whether `door` can be opened given a visited mask from
/// [`flood_reachable`].
///
/// `Exit` needs the door directly ahead, so the bot must stand on a reached
/// tile one step away from it. Standing on the door is not enough.
#[must_use]
pub fn exit_reachable(board: &Board, visited: &[bool], door: Position) -> bool {
    NEIGHBOUR_ORDER.iter().any(|&direction| {
        let next = door.offset(direction, 1);
        is_walkable(board.get(next))
            && board
                .index_of(next)
                .is_some_and(|i| visited.get(i).copied().unwrap_or(false))
    })
}

/// Mark every tile reachable from `from` by walking or jumping.
///
/// Returns a row-major visited mask. A non-walkable `from` yields an
/// all-false mask.
#[must_use]
pub fn flood_reachable(board: &Board, from: Position) -> Vec<bool> {
    let mut visited = vec![false; board.width() * board.height()];
    let mut stack = vec![from];

    while let Some(pos) = stack.pop() {
        let Some(index) = board.index_of(pos) else {
            continue;
        };
        if visited[index] || !is_walkable(board.get(pos)) {
            continue;
        }
        visited[index] = true;

        for direction in NEIGHBOUR_ORDER {
            let next = pos.offset(direction, 1);
            if is_walkable(board.get(next)) {
                stack.push(next);
            } else if let Some(landing) = jump_landing(board, pos, direction) {
                stack.push(landing);
            }
        }
    }

    visited
}

/// Count, uniqueness and reachability problems, in report order.
///
/// Door count problems come first, then start count problems, then one
/// `NotReachable` per unreachable door and coin (row-major). A door counts
/// as reachable only when it can be exited through (see
/// [`exit_reachable`]). Reachability is only checked when there is exactly
/// one start tile.
#[must_use]
pub fn structural_problems(board: &Board) -> Vec<Problem> {
    let mut problems = Vec::new();

    for kind in [TileKind::Door, TileKind::Start] {
        match board.count(kind) {
            0 => problems.push(Problem::new(ProblemKind::DoesNotExist, kind, None)),
            1 => {}
            _ => problems.push(Problem::new(ProblemKind::TooMany, kind, None)),
        }
    }

    if board.count(TileKind::Start) != 1 {
        return problems;
    }
    let Some(start) = board.start_position() else {
        return problems;
    };

    let visited = flood_reachable(board, start);
    for kind in [TileKind::Door, TileKind::Coin] {
        for pos in board.positions_of(kind) {
            let reached = match kind {
                TileKind::Door => exit_reachable(board, &visited, pos),
                _ => board.index_of(pos).is_some_and(|i| visited[i]),
            };
            if !reached {
                problems.push(Problem::new(ProblemKind::NotReachable, kind, Some(pos)));
            }
        }
    }

    problems
}
