//! Board graph: a read-only arena of nodes built from a board snapshot.
//!
//! Node index is the row-major tile index (`y * width + x`). Every tile gets
//! a node; only walkable tiles get outgoing edges. Search state is never
//! stored here, see [`crate::dijkstra`].

use tilebot_kernel::board::reach::{jump_landing, NEIGHBOUR_ORDER};
use tilebot_kernel::board::tile::is_walkable;
use tilebot_kernel::board::{Board, Direction, Position, TileKind};

/// How an edge is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// One tile, `Forward`.
    Step,
    /// Two tiles over a jumpable tile, `Jump`.
    Jump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub to: usize,
    pub kind: EdgeKind,
    pub direction: Direction,
}

impl Edge {
    /// Every edge costs one instruction.
    pub const WEIGHT: u32 = 1;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub position: Position,
    pub tile: TileKind,
    edges: Vec<Edge>,
}

impl Node {
    /// Outgoing edges in East, West, South, North order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Graph over one board snapshot. Rebuild whenever the board changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGraph {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
}

impl BoardGraph {
    #[must_use]
    pub fn build(board: &Board) -> Self {
        let nodes = board
            .positions()
            .map(|position| {
                let tile = board.get(position).unwrap_or(TileKind::Wall);
                let edges = if tile.is_walkable() {
                    edges_from(board, position)
                } else {
                    Vec::new()
                };
                Node {
                    position,
                    tile,
                    edges,
                }
            })
            .collect();
        Self {
            width: board.width(),
            height: board.height(),
            nodes,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Node index of `pos`, or `None` off the grid.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    #[must_use]
    pub fn node_at(&self, pos: Position) -> Option<&Node> {
        self.index_of(pos).and_then(|i| self.nodes.get(i))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }
}

fn edges_from(board: &Board, from: Position) -> Vec<Edge> {
    let mut edges = Vec::new();
    for direction in NEIGHBOUR_ORDER {
        let next = from.offset(direction, 1);
        if is_walkable(board.get(next)) {
            if let Some(to) = board.index_of(next) {
                edges.push(Edge {
                    to,
                    kind: EdgeKind::Step,
                    direction,
                });
            }
        } else if let Some(to) = jump_landing(board, from, direction).and_then(|p| board.index_of(p)) {
            edges.push(Edge {
                to,
                kind: EdgeKind::Jump,
                direction,
            });
        }
    }
    edges
}
