use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{Error, Result};

/// External node identifier, as it appears in topology files.
pub type NodeId = u64;

/// Dense node index: position of a node in the graph's adjacency table.
pub type NodeIndex = usize;

/// A directed link between two external node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Link {
    pub from: NodeId,
    pub to: NodeId,
}

impl Link {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// Mutable accumulator for a topology. Call [`GraphBuilder::build`] to freeze it.
///
/// Every edge endpoint is declared as a node, so the adjacency-closure
/// invariant of [`Graph`] holds by construction. Self-loops and repeated
/// edges carry no capacity in a unit-capacity model and are dropped.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, NodeIndex>,
    outgoing: Vec<Vec<NodeIndex>>,
    seen: HashSet<(NodeIndex, NodeIndex)>,
    dropped_self_loops: usize,
    dropped_duplicates: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            ids: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
            outgoing: Vec::with_capacity(node_count),
            seen: HashSet::with_capacity(edge_count),
            dropped_self_loops: 0,
            dropped_duplicates: 0,
        }
    }

    /// Declare a node (no-op if already present). Returns its dense index.
    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.ids.len();
        self.ids.push(id);
        self.index.insert(id, idx);
        self.outgoing.push(Vec::new());
        idx
    }

    /// Add a directed edge `from -> to`, declaring both endpoints.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        let u = self.add_node(from);
        let v = self.add_node(to);
        if u == v {
            self.dropped_self_loops += 1;
            tracing::debug!(node = from, "dropping self-loop");
            return;
        }
        if !self.seen.insert((u, v)) {
            self.dropped_duplicates += 1;
            tracing::debug!(from, to, "dropping duplicate edge");
            return;
        }
        self.outgoing[u].push(v);
    }

    /// Bulk load from an iterator of `(tail, head)` pairs.
    pub fn load_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Freeze into an immutable [`Graph`].
    pub fn build(self) -> Graph {
        if self.dropped_self_loops > 0 || self.dropped_duplicates > 0 {
            tracing::debug!(
                self_loops = self.dropped_self_loops,
                duplicates = self.dropped_duplicates,
                "edges dropped while building graph"
            );
        }
        Graph {
            ids: self.ids,
            index: self.index,
            outgoing: self.outgoing,
        }
    }
}

/// Immutable directed topology with a dense adjacency table.
///
/// `ids[i]` is the external id of dense node `i`, `outgoing[i]` its
/// successors as dense indices. Once built, a `Graph` exposes no mutation,
/// so it can be shared by `&Graph` across any number of concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, NodeIndex>,
    outgoing: Vec<Vec<NodeIndex>>,
}

impl Graph {
    /// Build from a node -> successors map.
    ///
    /// Every successor must itself be a key of `adjacency`; an undeclared
    /// neighbor is an upstream contract violation and fails with
    /// [`Error::UndeclaredNode`]. Nodes are indexed in ascending id order.
    pub fn from_adjacency(adjacency: &BTreeMap<NodeId, Vec<NodeId>>) -> Result<Self> {
        for (&node, successors) in adjacency {
            if let Some(&missing) = successors.iter().find(|s| !adjacency.contains_key(s)) {
                return Err(Error::UndeclaredNode {
                    node: missing,
                    referenced_by: node,
                });
            }
        }

        let edge_count = adjacency.values().map(Vec::len).sum();
        let mut builder = GraphBuilder::with_capacity(adjacency.len(), edge_count);
        for &node in adjacency.keys() {
            builder.add_node(node);
        }
        for (&node, successors) in adjacency {
            for &succ in successors {
                builder.add_edge(node, succ);
            }
        }
        Ok(builder.build())
    }

    /// Dense index of an external id.
    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    /// Dense index of an external id, or [`Error::UnknownNode`].
    pub fn require(&self, id: NodeId) -> Result<NodeIndex> {
        self.index_of(id).ok_or(Error::UnknownNode(id))
    }

    /// External id of a dense index.
    pub fn id_of(&self, idx: NodeIndex) -> NodeId {
        self.ids[idx]
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// External ids in dense-index order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Successors of a dense node, as dense indices.
    pub fn successors(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.outgoing[idx]
    }

    /// Successors of an external node id. Empty for unknown ids.
    pub fn neighbors_out(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.index_of(id)
            .map(|idx| self.outgoing[idx].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&v| self.ids[v])
    }

    /// All edges as external-id links, in dense adjacency order.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.outgoing.iter().enumerate().flat_map(move |(u, succ)| {
            succ.iter().map(move |&v| Link::new(self.ids[u], self.ids[v]))
        })
    }

    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.outgoing[idx].len()
    }

    /// In-degree of every dense node.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.ids.len()];
        for succ in &self.outgoing {
            for &v in succ {
                degrees[v] += 1;
            }
        }
        degrees
    }

    /// Raw dense adjacency table, used to seed residual graphs.
    pub(crate) fn adjacency(&self) -> &[Vec<NodeIndex>] {
        &self.outgoing
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    /// Number of ordered pairs `(a, b)` with `a != b`.
    pub fn pair_count(&self) -> usize {
        let n = self.node_count();
        n * n.saturating_sub(1)
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let ids_mem = self.ids.len() * size_of::<NodeId>();
        let index_mem = self.index.len() * (size_of::<NodeId>() + size_of::<NodeIndex>() + 16);
        let lists_mem = self.outgoing.len() * size_of::<Vec<NodeIndex>>();
        let edges_mem = self.edge_count() * size_of::<NodeIndex>();

        ids_mem + index_mem + lists_mem + edges_mem
    }
}
