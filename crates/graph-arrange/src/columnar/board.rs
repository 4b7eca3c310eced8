use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Sparse mapping from signed depth to the nodes placed at that depth
///
/// Depth 0 is the traversal root, nodes downstream of it get positive
/// depths, ancestors get negative ones. Within a depth, nodes keep the
/// order in which the traversal placed them; that order is the stacking
/// order of the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<N> {
    columns: BTreeMap<i32, Vec<N>>,
}

impl<N> Default for Board<N> {
    fn default() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }
}

impl<N> Board<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node to the column at the given depth
    pub fn add(&mut self, depth: i32, node: N) {
        self.columns.entry(depth).or_default().push(node);
    }

    /// Number of nodes on the board
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The range of depths that received at least one node
    pub fn depth_range(&self) -> Option<RangeInclusive<i32>> {
        let min = *self.columns.keys().next()?;
        let max = *self.columns.keys().next_back()?;
        Some(min..=max)
    }

    /// The nodes at a given depth, in placement order
    pub fn column(&self, depth: i32) -> Option<&[N]> {
        self.columns.get(&depth).map(Vec::as_slice)
    }

    /// Iterate over the columns in ascending depth order
    pub fn columns(&self) -> impl Iterator<Item = (i32, &[N])> {
        self.columns
            .iter()
            .map(|(&depth, nodes)| (depth, nodes.as_slice()))
    }

    /// Iterate over every node on the board
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.columns.values().flatten()
    }
}
