use super::depth::build_board;
use super::positions::assign_positions;
use super::Board;
use crate::{NodeExtents, Orientation, PositionSink, Vec2};
use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// Footprint of one component along the packing axis
///
/// A greedy linear measure, not a bounding box: the widest column's stacked
/// extent, margins included. Good enough to keep stacked components apart.
pub(crate) fn component_size<N, S>(
    board: &Board<N>,
    extents: &S,
    margin: Vec2,
    orientation: Orientation,
) -> f32
where
    N: Copy,
    S: NodeExtents<N>,
{
    let margin = if orientation.is_vertical() {
        margin.transposed()
    } else {
        margin
    };

    let mut size = 0.0f32;
    for (_, column) in board.columns() {
        let column_size: f32 = column
            .iter()
            .map(|&node| {
                let extent = extents.extent(node);
                if orientation.is_vertical() {
                    extent.x + margin.x
                } else {
                    extent.y + margin.y
                }
            })
            .sum();
        size = size.max(column_size);
    }

    size
}

/// Lay out every connected component of the graph, stacking the components
/// next to each other along the axis orthogonal to the depth axis
///
/// Components are discovered and placed in the graph's node iteration
/// order; the running offset keeps consecutive footprints from
/// intersecting. Isolated nodes are one-node components like any other.
pub(crate) fn pack_components<G, S, P>(
    graph: G,
    margin: Vec2,
    orientation: Orientation,
    extents: &S,
    sink: &mut P,
) where
    G: IntoNodeIdentifiers + IntoNeighborsDirected,
    G::NodeId: Copy + Eq + Hash + fmt::Debug,
    S: NodeExtents<G::NodeId>,
    P: PositionSink<G::NodeId>,
{
    let mut placed: HashSet<G::NodeId> = HashSet::new();
    let mut offset = Vec2::zero();
    let mut last_size = 0.0f32;

    for node in graph.node_identifiers() {
        if placed.contains(&node) {
            continue;
        }

        // No depth cutoff here: the traversal has to discover the whole
        // component so every node of it is marked as placed.
        let board = build_board(graph, node, None);
        placed.extend(board.nodes().copied());

        let size = component_size(&board, extents, margin, orientation);
        if orientation.is_vertical() {
            offset.x += (size + last_size + margin.x) / 2.0;
        } else {
            offset.y += (size + last_size + margin.y) / 2.0;
        }

        debug!(
            "Placing component of {count} nodes rooted at {node:?}, footprint {size}",
            count = board.len()
        );
        assign_positions(&board, extents, margin, orientation, offset, sink);

        last_size = size;
    }
}
