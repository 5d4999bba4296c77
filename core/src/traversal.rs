use crate::graph::{Graph, NodeId, NodeIndex};
use crate::residual::ResidualGraph;

/// One edge of an augmenting path.
///
/// `to` sits at position `slot` of the residual adjacency list of `from`
/// at the moment the path was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub(crate) slot: usize,
}

/// A source-to-destination path through a residual graph.
///
/// Only produced by [`find_augmenting_path`], so every hop is known to exist
/// in the residual graph it was found in. Always holds at least one hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    hops: Vec<Hop>,
}

impl AugmentingPath {
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Dense node sequence from source to destination.
    pub fn indices(&self) -> Vec<NodeIndex> {
        let mut out = Vec::with_capacity(self.hops.len() + 1);
        if let Some(first) = self.hops.first() {
            out.push(first.from);
        }
        out.extend(self.hops.iter().map(|h| h.to));
        out
    }

    /// External node ids from source to destination.
    pub fn nodes(&self, graph: &Graph) -> Vec<NodeId> {
        self.indices().into_iter().map(|i| graph.id_of(i)).collect()
    }
}

/// Per-search bookkeeping: visited flag and `(parent, slot)` for each node.
struct VisitRecord {
    visited: Vec<bool>,
    parent: Vec<Option<(NodeIndex, usize)>>,
}

impl VisitRecord {
    fn new(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count],
            parent: vec![None; node_count],
        }
    }

    /// Walk parent pointers from `dest` back to `source`.
    fn reconstruct(&self, source: NodeIndex, dest: NodeIndex) -> AugmentingPath {
        let mut hops = Vec::new();
        let mut current = dest;

        while current != source {
            let Some((parent, slot)) = self.parent[current] else {
                break;
            };
            hops.push(Hop {
                from: parent,
                to: current,
                slot,
            });
            current = parent;
        }

        hops.reverse();
        AugmentingPath { hops }
    }
}

/// Breadth-first search for one `source -> dest` path over the residual edges.
///
/// Layered: every node of the current frontier is already marked visited
/// before its successors are enumerated, and a node is marked the moment it
/// is discovered, so nothing is enqueued twice. The search returns as soon as
/// `dest` is discovered. Which path comes back depends on adjacency order;
/// the number of augmentations a caller can make does not.
///
/// `source != dest` is assumed.
pub fn find_augmenting_path(
    residual: &ResidualGraph,
    source: NodeIndex,
    dest: NodeIndex,
) -> Option<AugmentingPath> {
    debug_assert_ne!(source, dest);

    let mut record = VisitRecord::new(residual.node_count());
    let mut frontier: Vec<NodeIndex> = vec![source];
    let mut next: Vec<NodeIndex> = Vec::new();
    record.visited[source] = true;

    while !frontier.is_empty() {
        for &node in &frontier {
            for (slot, &succ) in residual.successors(node).iter().enumerate() {
                if record.visited[succ] {
                    continue;
                }
                record.visited[succ] = true;
                record.parent[succ] = Some((node, slot));

                if succ == dest {
                    return Some(record.reconstruct(source, dest));
                }
                next.push(succ);
            }
        }
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
    }

    None
}

/// Nodes reachable from `source` over the residual edges, as a dense mask.
pub fn reachable_set(residual: &ResidualGraph, source: NodeIndex) -> Vec<bool> {
    let mut seen = vec![false; residual.node_count()];
    let mut stack = vec![source];
    seen[source] = true;

    while let Some(node) = stack.pop() {
        for &succ in residual.successors(node) {
            if !seen[succ] {
                seen[succ] = true;
                stack.push(succ);
            }
        }
    }

    seen
}
