//! Global link connectivity: the fewest link failures that disconnect some
//! ordered pair, with a concrete pair and cut-set as witness.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::flow::{count_disjoint_dense, max_flow};
use crate::graph::{Graph, Link, NodeId, NodeIndex};
use crate::traversal::reachable_set;

/// Result of [`link_connectivity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkConnectivity {
    /// Fewer than two nodes: there is no pair, so no value is defined.
    SingleNode,
    /// `to` is unreachable from `from`; edge-connectivity is 0.
    NotStronglyConnected { from: NodeId, to: NodeId },
    /// The graph is `min_k`-edge-connected. Removing `cut` disconnects `to`
    /// from `from`.
    Connected {
        min_k: usize,
        from: NodeId,
        to: NodeId,
        cut: Vec<Link>,
    },
}

impl LinkConnectivity {
    /// Directed edge-connectivity, if defined.
    pub fn edge_connectivity(&self) -> Option<usize> {
        match self {
            LinkConnectivity::SingleNode => None,
            LinkConnectivity::NotStronglyConnected { .. } => Some(0),
            LinkConnectivity::Connected { min_k, .. } => Some(*min_k),
        }
    }

    pub fn is_strongly_connected(&self) -> bool {
        matches!(self, LinkConnectivity::Connected { .. })
    }
}

/// Pair attaining the smallest value seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Witness {
    k: usize,
    from: NodeIndex,
    to: NodeIndex,
}

impl Witness {
    /// Smaller k wins; ties go to the pair enumerated first.
    fn better(a: Option<Witness>, b: Option<Witness>) -> Option<Witness> {
        match (a, b) {
            (Some(x), Some(y)) => Some(if (y.k, y.from, y.to) < (x.k, x.from, x.to) {
                y
            } else {
                x
            }),
            (x, None) => x,
            (None, y) => y,
        }
    }
}

/// Scan every pair leaving `source`. `Err` carries the first disconnected pair.
fn scan_row(graph: &Graph, source: NodeIndex) -> Result<Option<Witness>, (NodeIndex, NodeIndex)> {
    let mut best: Option<Witness> = None;
    for dest in 0..graph.node_count() {
        if dest == source {
            continue;
        }
        let k = count_disjoint_dense(graph, source, dest);
        if k == 0 {
            return Err((source, dest));
        }
        if best.map_or(true, |w| k < w.k) {
            best = Some(Witness {
                k,
                from: source,
                to: dest,
            });
        }
    }
    Ok(best)
}

/// Edges leaving the residual source side of a max flow from `from` to `to`.
///
/// At termination every original edge from a node still reachable from
/// `from` to a node that is not has been saturated, and there are exactly as
/// many such edges as augmenting paths. When the source side is just
/// `{from}` this is the set of `from`'s links that the flow saturated; in
/// general the cut can lie further downstream.
pub fn witness_cut(graph: &Graph, from: NodeIndex, to: NodeIndex) -> Vec<Link> {
    let flow = max_flow(graph, from, to);
    let source_side = reachable_set(&flow.residual, from);

    let mut cut = Vec::with_capacity(flow.paths);
    for u in (0..graph.node_count()).filter(|&u| source_side[u]) {
        for &v in graph.successors(u) {
            if !source_side[v] {
                cut.push(Link::new(graph.id_of(u), graph.id_of(v)));
            }
        }
    }

    debug_assert_eq!(cut.len(), flow.paths);
    cut
}

/// Minimum disjoint-path value over all ordered pairs, with a witness.
///
/// Stops at the first pair found with value 0. Which pair is reported among
/// ties (or among disconnected pairs, when rows run in parallel) depends on
/// enumeration order and is not part of the contract.
pub fn link_connectivity(graph: &Graph) -> LinkConnectivity {
    let n = graph.node_count();
    let _span = tracing::info_span!("link_connectivity", nodes = n).entered();

    if n < 2 {
        tracing::info!("fewer than two nodes, connectivity undefined");
        return LinkConnectivity::SingleNode;
    }

    #[cfg(feature = "parallel")]
    let scanned = (0..n)
        .into_par_iter()
        .map(|source| scan_row(graph, source))
        .try_reduce(|| None, |a, b| Ok(Witness::better(a, b)));

    #[cfg(not(feature = "parallel"))]
    let scanned = (0..n).try_fold(None, |best, source| {
        scan_row(graph, source).map(|row| Witness::better(best, row))
    });

    let witness = match scanned {
        Err((from, to)) => {
            let (from, to) = (graph.id_of(from), graph.id_of(to));
            tracing::info!(from, to, "graph is not strongly connected");
            return LinkConnectivity::NotStronglyConnected { from, to };
        }
        Ok(Some(w)) => w,
        Ok(None) => return LinkConnectivity::SingleNode,
    };

    let cut = witness_cut(graph, witness.from, witness.to);
    let (from, to) = (graph.id_of(witness.from), graph.id_of(witness.to));
    tracing::info!(min_k = witness.k, from, to, cut = cut.len(), "edge connectivity found");

    LinkConnectivity::Connected {
        min_k: witness.k,
        from,
        to,
        cut,
    }
}
