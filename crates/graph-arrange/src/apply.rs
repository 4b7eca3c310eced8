use crate::Point;
use std::collections::HashMap;
use std::hash::Hash;

/// Trait for receiving computed node positions
///
/// The arranger pushes every position through a sink as soon as it is
/// computed, so a host can translate its widgets and redraw connections
/// directly, without an intermediate map.
pub trait PositionSink<N> {
    /// Accept the new position of a node
    fn place(&mut self, node: N, position: Point);
}

// Blanket implementation for closures
impl<N, F> PositionSink<N> for F
where
    F: FnMut(N, Point),
{
    fn place(&mut self, node: N, position: Point) {
        self(node, position)
    }
}

// Implementation for HashMap, used by the map-returning convenience methods
impl<N: Eq + Hash> PositionSink<N> for HashMap<N, Point> {
    fn place(&mut self, node: N, position: Point) {
        self.insert(node, position);
    }
}
