mod board;
mod depth;
mod packing;
mod positions;

use crate::{LayoutEngine, NodeExtents, Orientation, Point, PositionSink, Vec2};
use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;
use tracing::debug;

pub use board::Board;

use depth::build_board;
use packing::pack_components;
use positions::assign_positions;

/// Errors that can occur during columnar layout computation
#[derive(Debug, Error)]
pub enum ColumnarLayoutError<N>
where
    N: fmt::Debug,
{
    /// The requested traversal root is not a node of the graph
    #[error("root node {0:?} is not part of the graph")]
    RootNotInGraph(N),
}

/// Configuration for the columnar auto-arrangement
///
/// Nodes are grouped into columns by their signed depth relative to a
/// traversal root and stacked within each column in traversal order. The
/// layout is fully deterministic: identical graphs and extents always
/// produce identical positions.
#[derive(Debug, Clone)]
pub struct ColumnarLayout {
    /// Gap between adjacent columns (x) and between stacked nodes (y)
    pub margin: Vec2,

    /// Which way the depth axis flows
    pub orientation: Orientation,

    /// Drop nodes whose absolute depth relative to the root exceeds this
    pub max_depth: Option<u32>,
}

impl Default for ColumnarLayout {
    fn default() -> Self {
        Self {
            margin: Vec2::new(50.0, 50.0),
            orientation: Orientation::Horizontal,
            max_depth: None,
        }
    }
}

impl ColumnarLayout {
    /// Create a new columnar layout with the given margin
    pub fn new(margin: Vec2) -> Self {
        Self {
            margin,
            ..Default::default()
        }
    }

    /// Group the nodes reachable from `root` into depth columns
    ///
    /// The traversal follows connections in both directions, so it covers
    /// the root's whole connected component unless [`Self::max_depth`] cuts
    /// it short.
    ///
    /// # Errors
    /// Fails if `root` is not a node of the graph
    pub fn compute_board<G>(
        &self,
        graph: G,
        root: G::NodeId,
    ) -> Result<Board<G::NodeId>, ColumnarLayoutError<G::NodeId>>
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected,
        G::NodeId: Copy + Eq + Hash + fmt::Debug,
    {
        if !graph.node_identifiers().any(|node| node == root) {
            return Err(ColumnarLayoutError::RootNotInGraph(root));
        }

        Ok(build_board(graph, root, self.max_depth))
    }

    /// Compute positions for a board, offset along the layout axes
    ///
    /// Positions can be recomputed from the same board whenever the
    /// measured extents change.
    pub fn compute_positions<N, S>(
        &self,
        board: &Board<N>,
        extents: &S,
        offset: Vec2,
    ) -> HashMap<N, Point>
    where
        N: Copy + Eq + Hash,
        S: NodeExtents<N>,
    {
        let mut positions = HashMap::new();
        assign_positions(
            board,
            extents,
            self.margin,
            self.orientation,
            offset,
            &mut positions,
        );
        positions
    }

    /// Arrange the connected subgraph around `root`
    ///
    /// # Errors
    /// Fails if `root` is not a node of the graph
    pub fn arrange<G, S>(
        &self,
        graph: G,
        root: G::NodeId,
        extents: &S,
    ) -> Result<HashMap<G::NodeId, Point>, ColumnarLayoutError<G::NodeId>>
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected,
        G::NodeId: Copy + Eq + Hash + fmt::Debug,
        S: NodeExtents<G::NodeId>,
    {
        let mut positions = HashMap::new();
        self.arrange_into(graph, root, extents, &mut positions)?;
        Ok(positions)
    }

    /// Arrange the connected subgraph around `root`, pushing each position
    /// through the sink as it is computed
    ///
    /// # Errors
    /// Fails if `root` is not a node of the graph
    pub fn arrange_into<G, S, P>(
        &self,
        graph: G,
        root: G::NodeId,
        extents: &S,
        sink: &mut P,
    ) -> Result<(), ColumnarLayoutError<G::NodeId>>
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected,
        G::NodeId: Copy + Eq + Hash + fmt::Debug,
        S: NodeExtents<G::NodeId>,
        P: PositionSink<G::NodeId>,
    {
        debug!("Arranging from {root:?}");
        let board = self.compute_board(graph, root)?;
        assign_positions(
            &board,
            extents,
            self.margin,
            self.orientation,
            Vec2::zero(),
            sink,
        );
        Ok(())
    }

    /// Arrange the entire graph, packing disconnected components next to
    /// each other so they never overlap
    pub fn arrange_all<G, S>(&self, graph: G, extents: &S) -> HashMap<G::NodeId, Point>
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected,
        G::NodeId: Copy + Eq + Hash + fmt::Debug,
        S: NodeExtents<G::NodeId>,
    {
        let mut positions = HashMap::new();
        self.arrange_all_into(graph, extents, &mut positions);
        positions
    }

    /// Arrange the entire graph, pushing each position through the sink as
    /// it is computed
    pub fn arrange_all_into<G, S, P>(&self, graph: G, extents: &S, sink: &mut P)
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected,
        G::NodeId: Copy + Eq + Hash + fmt::Debug,
        S: NodeExtents<G::NodeId>,
        P: PositionSink<G::NodeId>,
    {
        debug!("Arranging all components");
        pack_components(graph, self.margin, self.orientation, extents, sink);
    }
}

// Implement LayoutEngine for any graph with the required capabilities
impl<G> LayoutEngine<G> for ColumnarLayout
where
    G: IntoNodeIdentifiers + IntoNeighborsDirected,
    G::NodeId: Copy + Eq + Hash + fmt::Debug,
{
    type NodeId = G::NodeId;

    fn layout<S>(&self, graph: G, extents: &S) -> HashMap<Self::NodeId, Point>
    where
        S: NodeExtents<Self::NodeId>,
    {
        self.arrange_all(graph, extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graphmap::DiGraphMap;
    use test_log::test;

    fn chain() -> DiGraphMap<char, ()> {
        let mut graph = DiGraphMap::new();
        graph.add_edge('a', 'b', ());
        graph.add_edge('b', 'c', ());
        graph
    }

    fn uniform(_: char) -> Vec2 {
        Vec2::new(100.0, 50.0)
    }

    #[test]
    fn chain_positions_horizontal() {
        let layout = ColumnarLayout::default();
        let positions = layout.arrange(&chain(), 'a', &uniform).unwrap();

        assert_eq!(positions[&'a'], Point::new(0.0, -50.0));
        assert_eq!(positions[&'b'], Point::new(150.0, -50.0));
        assert_eq!(positions[&'c'], Point::new(300.0, -50.0));
    }

    #[test]
    fn vertical_orientation_transposes_the_layout() {
        let layout = ColumnarLayout {
            orientation: Orientation::Vertical,
            ..Default::default()
        };
        let positions = layout.arrange(&chain(), 'a', &uniform).unwrap();

        assert_eq!(positions[&'a'], Point::new(-50.0, 0.0));
        assert_eq!(positions[&'b'], Point::new(-50.0, 150.0));
        assert_eq!(positions[&'c'], Point::new(-50.0, 300.0));
    }

    #[test]
    fn unknown_root_is_rejected() {
        let layout = ColumnarLayout::default();
        let result = layout.arrange(&chain(), 'z', &uniform);

        assert!(matches!(
            result,
            Err(ColumnarLayoutError::RootNotInGraph('z'))
        ));
    }

    #[test]
    fn max_depth_leaves_far_nodes_unpositioned() {
        let mut graph = DiGraphMap::new();
        for i in 0..5 {
            graph.add_edge(i, i + 1, ());
        }
        let layout = ColumnarLayout {
            max_depth: Some(2),
            ..Default::default()
        };

        let positions = layout
            .arrange(&graph, 2, &|_: i32| Vec2::new(100.0, 50.0))
            .unwrap();

        assert_eq!(positions.len(), 5);
        assert!(!positions.contains_key(&5));
    }

    // Vertical extent of one component's nodes, stacking margins excluded
    fn occupied_span(positions: &HashMap<char, Point>, nodes: &[char], height: f32) -> (f32, f32) {
        let tops = nodes.iter().map(|node| positions[node].y);
        let min = tops.clone().fold(f32::INFINITY, f32::min);
        let max = tops.fold(f32::NEG_INFINITY, f32::max) + height;
        (min, max)
    }

    fn two_components(edges: &[(char, char)]) -> HashMap<char, Point> {
        let mut graph = DiGraphMap::new();
        for &(from, to) in edges {
            graph.add_edge(from, to, ());
        }
        ColumnarLayout::default().arrange_all(&graph, &uniform)
    }

    #[test]
    fn disjoint_components_never_overlap() {
        // A three-node chain and a two-into-one join, in both host orders.
        let chain_edges = [('a', 'b'), ('b', 'c')];
        let join_edges = [('d', 'f'), ('e', 'f')];

        for edges in [
            [chain_edges, join_edges].concat(),
            [join_edges, chain_edges].concat(),
        ] {
            let positions = two_components(&edges);
            assert_eq!(positions.len(), 6);

            let (chain_top, chain_bottom) = occupied_span(&positions, &['a', 'b', 'c'], 50.0);
            let (join_top, join_bottom) = occupied_span(&positions, &['d', 'e', 'f'], 50.0);

            assert!(
                chain_bottom <= join_top || join_bottom <= chain_top,
                "components overlap: chain [{chain_top}, {chain_bottom}], \
                 join [{join_top}, {join_bottom}]"
            );
        }
    }

    #[test]
    fn isolated_node_is_its_own_component() {
        let mut graph = DiGraphMap::new();
        graph.add_edge('a', 'b', ());
        graph.add_node('x');

        let positions = ColumnarLayout::default().arrange_all(&graph, &uniform);

        assert_eq!(positions.len(), 3);
        assert_ne!(positions[&'x'].y, positions[&'a'].y);
    }

    #[test]
    fn arrangement_is_idempotent() {
        let mut graph = DiGraphMap::new();
        graph.add_edge('a', 'b', ());
        graph.add_edge('b', 'c', ());
        graph.add_edge('c', 'a', ());
        graph.add_edge('d', 'e', ());
        let layout = ColumnarLayout::default();

        let first = layout.arrange_all(&graph, &uniform);
        let second = layout.arrange_all(&graph, &uniform);

        assert_eq!(first, second);
    }

    #[test]
    fn positions_are_applied_through_the_sink() {
        let mut applied = Vec::new();
        let layout = ColumnarLayout::default();
        layout
            .arrange_into(&chain(), 'a', &uniform, &mut |node, position: Point| {
                applied.push((node, position));
            })
            .unwrap();

        assert_eq!(applied.len(), 3);
        assert_eq!(applied[0], ('a', Point::new(0.0, -50.0)));
    }

    #[test]
    fn unmeasured_nodes_fall_back_to_zero_extent() {
        let mut measured = HashMap::new();
        measured.insert('a', Vec2::new(100.0, 50.0));
        // 'b' and 'c' have not been rendered yet

        let layout = ColumnarLayout::default();
        let positions = layout.arrange(&chain(), 'a', &measured).unwrap();

        assert_eq!(positions.len(), 3);
        assert_eq!(positions[&'b'], Point::new(150.0, -25.0));
    }
}
