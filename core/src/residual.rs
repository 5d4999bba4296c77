use crate::graph::{Graph, NodeIndex};
use crate::traversal::AugmentingPath;

/// Owned, mutable working copy of a graph's dense adjacency.
///
/// Models a unit-capacity residual network: an edge present in a list has
/// one unit of residual capacity. Saturating a path removes its forward
/// edges and appends the reverse edges, so a list may name the same
/// successor twice when an antiparallel edge already existed (capacity 2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualGraph {
    outgoing: Vec<Vec<NodeIndex>>,
}

impl ResidualGraph {
    /// Fresh working copy. The source graph is never touched again.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            outgoing: graph.adjacency().to_vec(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    pub fn successors(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.outgoing[idx]
    }

    pub fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.outgoing[from].contains(&to)
    }

    /// Push one unit of flow along `path`: remove every `u -> v` hop and
    /// append `v -> u`.
    ///
    /// Each hop is removed by the slot recorded during the search. A simple
    /// path leaves every node at most once, and appends never move existing
    /// entries, so the recorded slots stay valid while the hops are applied
    /// in order.
    pub fn saturate(&mut self, path: &AugmentingPath) {
        for hop in path.hops() {
            debug_assert_eq!(
                self.outgoing[hop.from].get(hop.slot),
                Some(&hop.to),
                "augmenting path does not belong to this residual graph"
            );
            self.outgoing[hop.from].swap_remove(hop.slot);
            self.outgoing[hop.to].push(hop.from);
        }
    }
}
