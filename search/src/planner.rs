//! Path planner: greedy nearest-coin route, lowered to raw instructions.
//!
//! The route is not globally optimal. From the current origin the planner
//! walks to the nearest remaining coin (ties: lower row-major index), then
//! to the nearest tile one step from the door (same tie-break), and faces
//! the door. The node path is lowered into turns, `Forward`, `Jump` and one
//! terminal `Exit`.

use tracing::{debug, instrument};

use tilebot_kernel::board::reach::{structural_problems, NEIGHBOUR_ORDER};
use tilebot_kernel::board::tile::{is_jumpable, is_walkable};
use tilebot_kernel::board::{Board, Direction, Position, TileKind};
use tilebot_kernel::program::{turns_between, Instruction};

use crate::dijkstra::shortest_paths;
use crate::error::SolveError;
use crate::graph::BoardGraph;

/// Plan raw instructions for `board`. The caller's board is not modified.
///
/// # Errors
///
/// - [`SolveError::BoardHasProblems`] if structural diagnostics report
///   anything.
/// - [`SolveError::PlannerInvariant`] if the route cannot be lowered.
#[instrument(level = "debug", skip_all, fields(width = board.width(), height = board.height()))]
pub fn plan(board: &Board) -> Result<Vec<Instruction>, SolveError> {
    let problems = structural_problems(board);
    if !problems.is_empty() {
        return Err(SolveError::BoardHasProblems { problems });
    }
    let route = route(board)?;
    lower(board, &route)
}

/// Node path from the bot through every coin to the door, door included.
///
/// The node before the door is always one step away from it, since `Exit`
/// needs the door directly ahead. A door reached by a jump is never the end
/// of the route.
///
/// # Errors
///
/// [`SolveError::PlannerInvariant`] if a coin or the door is unreachable.
pub fn route(board: &Board) -> Result<Vec<Position>, SolveError> {
    let door = board.door_position().ok_or_else(|| invariant("board has no door"))?;
    let mut work = board.clone();
    let mut origin = work.bot_position();
    let mut route = Vec::new();

    loop {
        let graph = BoardGraph::build(&work);
        let paths = shortest_paths(&graph, origin)
            .ok_or_else(|| invariant(format!("origin {origin} is off the board")))?;

        let coins = work.positions_of(TileKind::Coin);
        if coins.is_empty() {
            let approach = NEIGHBOUR_ORDER
                .iter()
                .map(|&direction| door.offset(direction, 1))
                .filter(|&next| is_walkable(work.get(next)))
                .filter_map(|next| Some((paths.distance(next)?, work.index_of(next)?, next)))
                .min_by_key(|&(distance, index, _)| (distance, index));
            let Some((_, _, approach)) = approach else {
                return Err(invariant(format!("door {door} unreachable from {origin}")));
            };
            debug!(%approach, "door approach");
            route.extend(paths.path_to(approach).unwrap_or_default());
            route.push(approach);
            route.push(door);
            break;
        }

        let nearest = coins
            .into_iter()
            .filter_map(|coin| paths.distance(coin).map(|d| (d, coin)))
            .min_by_key(|&(d, _)| d);
        let Some((distance, coin)) = nearest else {
            return Err(invariant(format!("no coin reachable from {origin}")));
        };
        debug!(%coin, distance, "next coin");

        route.extend(paths.path_to(coin).unwrap_or_default());
        work.set(coin, TileKind::Normal);
        origin = coin;
    }

    debug!(nodes = route.len(), "route complete");
    Ok(route)
}

/// Lower a node path into instructions.
///
/// Only the final node emits `Exit`; a door crossed earlier is an ordinary
/// step.
///
/// # Errors
///
/// [`SolveError::PlannerInvariant`] for gaps other than one or two tiles, a
/// two-tile gap without a jumpable tile in between, or a path too short to
/// end at a door.
pub fn lower(board: &Board, route: &[Position]) -> Result<Vec<Instruction>, SolveError> {
    if route.len() < 2 {
        return Err(invariant("route must contain at least two nodes"));
    }
    let last = route.len() - 1;
    let mut facing = board.bot_facing();
    let mut out = Vec::new();

    for (i, pair) in route.windows(2).enumerate() {
        let (current, next) = (pair[0], pair[1]);
        if next != current.offset(facing, 1) {
            let travel = Direction::from_to(current, next);
            out.extend(turns_between(facing, travel));
            facing = travel;
        }

        if i + 1 == last {
            if next != current.offset(facing, 1) {
                return Err(invariant(format!("door {next} is not adjacent to {current}")));
            }
            out.push(Instruction::Exit);
            break;
        }

        let straight = |steps| next == current.offset(facing, steps);
        if straight(1) {
            out.push(Instruction::Forward);
        } else if straight(2) {
            let over = current.offset(facing, 1);
            if !is_jumpable(board.get(over)) {
                return Err(invariant(format!("jump from {current} over {over} is blocked")));
            }
            out.push(Instruction::Jump);
        } else {
            return Err(invariant(format!("gap from {current} to {next}")));
        }
    }

    Ok(out)
}

fn invariant(detail: impl Into<String>) -> SolveError {
    SolveError::PlannerInvariant {
        detail: detail.into(),
    }
}
