//! Single-source shortest paths over a [`BoardGraph`].
//!
//! All edges weigh one instruction, so the unsettled set is a FIFO queue and
//! each node is settled the first time it is discovered.
//!
//! # Tie-break
//!
//! Nodes are discovered in the edge order (East, West, South, North) of the
//! node being settled. The first discovery fixes a node's predecessor; an
//! equal-length path found later never replaces it. For a fixed board this
//! makes every reported path a pure function of the board and the source.

use std::collections::VecDeque;

use tilebot_kernel::board::Position;

use crate::graph::{BoardGraph, Edge};

/// Per-run search table. The graph stays read-only.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g BoardGraph,
    source: usize,
    distance: Vec<Option<u32>>,
    predecessor: Vec<Option<usize>>,
}

/// Search from `source`. Returns `None` if `source` is off the grid.
#[must_use]
pub fn shortest_paths(graph: &BoardGraph, source: Position) -> Option<ShortestPaths<'_>> {
    let source = graph.index_of(source)?;
    let mut distance = vec![None; graph.len()];
    let mut predecessor = vec![None; graph.len()];
    let mut unsettled = VecDeque::from([source]);
    distance[source] = Some(0);

    while let Some(current) = unsettled.pop_front() {
        let Some(node) = graph.node(current) else {
            continue;
        };
        let base = distance[current].unwrap_or(0);
        for edge in node.edges() {
            if distance[edge.to].is_none() {
                distance[edge.to] = Some(base + Edge::WEIGHT);
                predecessor[edge.to] = Some(current);
                unsettled.push_back(edge.to);
            }
        }
    }

    Some(ShortestPaths {
        graph,
        source,
        distance,
        predecessor,
    })
}

impl ShortestPaths<'_> {
    #[must_use]
    pub fn source(&self) -> Position {
        self.position(self.source)
    }

    /// Instructions-worth of edges from the source, or `None` if unreachable.
    #[must_use]
    pub fn distance(&self, pos: Position) -> Option<u32> {
        self.graph.index_of(pos).and_then(|i| self.distance[i])
    }

    /// Path from the source up to, but excluding, `pos`.
    ///
    /// Empty for the source itself; `None` if `pos` is unreachable.
    #[must_use]
    pub fn path_to(&self, pos: Position) -> Option<Vec<Position>> {
        let target = self.graph.index_of(pos)?;
        self.distance[target]?;
        let mut path = Vec::new();
        let mut cursor = self.predecessor[target];
        while let Some(index) = cursor {
            path.push(self.position(index));
            cursor = self.predecessor[index];
        }
        path.reverse();
        Some(path)
    }

    /// Number of nodes reached, source included.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.distance.iter().filter(|d| d.is_some()).count()
    }

    fn position(&self, index: usize) -> Position {
        self.graph
            .node(index)
            .map_or(Position::new(0, 0), |n| n.position)
    }
}

/// Inclusive path from `from` to `to`, searched afresh from `from`.
#[must_use]
pub fn path_between(graph: &BoardGraph, from: Position, to: Position) -> Option<Vec<Position>> {
    let paths = shortest_paths(graph, from)?;
    let mut path = paths.path_to(to)?;
    path.push(to);
    Some(path)
}
