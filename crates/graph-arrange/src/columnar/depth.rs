use super::Board;
use petgraph::visit::IntoNeighborsDirected;
use petgraph::Direction;
use std::collections::HashSet;
use std::hash::Hash;

/// Tracks the nodes already placed during one traversal
///
/// A node is tracked before its edges are followed, which is what keeps the
/// traversal finite on cycles and self-loops: every node is placed at most
/// once, at the depth of whichever path reached it first.
#[derive(Debug)]
pub(crate) struct Visited<N> {
    seen: HashSet<N>,
}

impl<N: Copy + Eq + Hash> Visited<N> {
    pub(crate) fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Record a node; returns false if it was already tracked
    pub(crate) fn track(&mut self, node: N) -> bool {
        self.seen.insert(node)
    }
}

/// Build the board of every node reachable from `root`, following
/// connections in both directions
///
/// With `max_depth` set, nodes whose signed depth falls outside
/// `[-max_depth, max_depth]` are left off the board entirely.
pub(crate) fn build_board<G>(graph: G, root: G::NodeId, max_depth: Option<u32>) -> Board<G::NodeId>
where
    G: IntoNeighborsDirected,
    G::NodeId: Copy + Eq + Hash,
{
    let mut board = Board::new();
    let mut visited = Visited::new();
    place(graph, root, 0, max_depth, &mut visited, &mut board);
    board
}

fn place<G>(
    graph: G,
    node: G::NodeId,
    depth: i32,
    max_depth: Option<u32>,
    visited: &mut Visited<G::NodeId>,
    board: &mut Board<G::NodeId>,
) where
    G: IntoNeighborsDirected,
    G::NodeId: Copy + Eq + Hash,
{
    if max_depth.is_some_and(|max| depth.unsigned_abs() > max) {
        return;
    }
    if !visited.track(node) {
        return;
    }

    board.add(depth, node);

    // Outgoing edges are followed before incoming ones, each subtree to
    // completion. When a node is reachable both ways, the path that gets
    // there first under this order decides its depth, not the shortest
    // path. Saved layouts depend on this tie-break.
    for next in graph.neighbors_directed(node, Direction::Outgoing) {
        place(graph, next, depth + 1, max_depth, visited, board);
    }
    for prev in graph.neighbors_directed(node, Direction::Incoming) {
        place(graph, prev, depth - 1, max_depth, visited, board);
    }
}
