use crate::Vec2;
use std::collections::HashMap;
use std::hash::Hash;

/// Trait for providing node extents during layout computation
///
/// Extents are reported along the layout axes: `x` along the depth (flow)
/// axis, `y` across it. For a horizontal layout this is the plain on-screen
/// (width, height); a host measuring widgets for a vertical layout reports
/// the transposed pair instead, so the layout arithmetic never has to know
/// which screen axis it is working along.
pub trait NodeExtents<N> {
    /// Get the extent of a node
    fn extent(&self, node: N) -> Vec2;
}

// Blanket implementation for closures
impl<N, F> NodeExtents<N> for F
where
    F: Fn(N) -> Vec2,
{
    fn extent(&self, node: N) -> Vec2 {
        self(node)
    }
}

// Implementation for HashMap; a node without a recorded measurement gets a
// zero extent rather than failing the layout
impl<N: Eq + Hash + Copy> NodeExtents<N> for HashMap<N, Vec2> {
    fn extent(&self, node: N) -> Vec2 {
        self.get(&node).copied().unwrap_or(Vec2::zero())
    }
}
