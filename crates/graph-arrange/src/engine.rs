use crate::{NodeExtents, Point};
use std::collections::HashMap;
use std::hash::Hash;

/// A layout engine that can compute positions for graph nodes
///
/// This trait is generic over the graph type `G`, allowing different layout
/// engines to work with different graph types:
/// - Columnar layouts implement `LayoutEngine<G>` for directed graphs
/// - Force-directed layouts could implement it for undirected graphs
/// - Other layouts can specify their own graph requirements
pub trait LayoutEngine<G> {
    /// The type used to identify nodes in the graph
    type NodeId: Copy + Eq + Hash;

    /// Compute node positions for the given graph
    ///
    /// Every node of the graph receives a position; disconnected parts of
    /// the graph must not overlap.
    fn layout<S>(&self, graph: G, extents: &S) -> HashMap<Self::NodeId, Point>
    where
        S: NodeExtents<Self::NodeId>;
}
