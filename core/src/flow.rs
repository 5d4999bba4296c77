use crate::error::Result;
use crate::graph::{Graph, NodeId, NodeIndex};
use crate::residual::ResidualGraph;
use crate::traversal::find_augmenting_path;

/// Outcome of a unit-capacity max-flow run between two dense nodes.
#[derive(Debug, Clone)]
pub struct MaxFlow {
    /// Number of augmenting paths found: the max number of edge-disjoint paths.
    pub paths: usize,
    /// Residual graph at termination.
    pub residual: ResidualGraph,
}

/// Edmonds-Karp on unit capacities: augment along BFS paths in a private
/// residual copy until the destination becomes unreachable.
///
/// `source == dest` is defined as zero paths; no search or mutation happens
/// and the returned residual graph is an untouched copy.
pub fn max_flow(graph: &Graph, source: NodeIndex, dest: NodeIndex) -> MaxFlow {
    let mut residual = ResidualGraph::from_graph(graph);
    if source == dest {
        return MaxFlow { paths: 0, residual };
    }

    let mut paths = 0;
    while let Some(path) = find_augmenting_path(&residual, source, dest) {
        tracing::trace!(iteration = paths, hops = path.len(), "augmenting");
        residual.saturate(&path);
        paths += 1;
    }

    MaxFlow { paths, residual }
}

/// Edge-disjoint path count between two dense nodes.
pub fn count_disjoint_dense(graph: &Graph, source: NodeIndex, dest: NodeIndex) -> usize {
    if source == dest {
        return 0;
    }
    max_flow(graph, source, dest).paths
}

/// Maximum number of pairwise edge-disjoint directed paths from `src` to `dest`.
///
/// By Menger's theorem this is also the fewest links whose failure
/// disconnects `dest` from `src`. Bounded by
/// `min(out_degree(src), in_degree(dest))`; `0` when `src == dest` or when
/// `dest` is unreachable.
pub fn count_disjoint(graph: &Graph, src: NodeId, dest: NodeId) -> Result<usize> {
    let s = graph.require(src)?;
    let d = graph.require(dest)?;
    let k = count_disjoint_dense(graph, s, d);
    tracing::debug!(src, dest, k, "counted disjoint paths");
    Ok(k)
}

/// Same computation as [`count_disjoint`], returning the final residual
/// graph instead of the count.
pub fn residual_graph(graph: &Graph, src: NodeId, dest: NodeId) -> Result<ResidualGraph> {
    let s = graph.require(src)?;
    let d = graph.require(dest)?;
    Ok(max_flow(graph, s, d).residual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::GraphBuilder;

    fn graph_of(edges: &[(u64, u64)]) -> Graph {
        let mut b = GraphBuilder::new();
        b.load_edges(edges.iter().copied());
        b.build()
    }

    fn make_triangle() -> Graph {
        graph_of(&[(1, 2), (2, 1), (1, 3), (3, 1), (2, 3), (3, 2)])
    }

    #[test]
    fn test_triangle_every_pair_two() {
        let g = make_triangle();
        for &a in g.node_ids() {
            for &b in g.node_ids() {
                if a != b {
                    assert_eq!(count_disjoint(&g, a, b).unwrap(), 2, "{a} -> {b}");
                }
            }
        }
    }

    #[test]
    fn test_chain_one_direction() {
        let g = graph_of(&[(1, 2), (2, 3)]);
        assert_eq!(count_disjoint(&g, 1, 3).unwrap(), 1);
        assert_eq!(count_disjoint(&g, 3, 1).unwrap(), 0);
    }

    #[test]
    fn test_same_node_is_zero() {
        let g = make_triangle();
        assert_eq!(count_disjoint(&g, 2, 2).unwrap(), 0);
    }

    #[test]
    fn test_unknown_node() {
        let g = make_triangle();
        assert_eq!(count_disjoint(&g, 1, 99), Err(Error::UnknownNode(99)));
        assert_eq!(count_disjoint(&g, 42, 1), Err(Error::UnknownNode(42)));
    }

    #[test]
    fn test_needs_reverse_edge_to_reach_max() {
        // Classic trap: the shortest first path 0→1→2→5 blocks both
        // 0→1→3→5 and 0→4→2→5 unless flow on 1→2 is cancelled.
        let g = graph_of(&[(0, 1), (0, 4), (1, 2), (1, 3), (4, 2), (2, 5), (3, 5)]);
        assert_eq!(count_disjoint(&g, 0, 5).unwrap(), 2);
    }

    #[test]
    fn test_bounded_by_degrees() {
        // Star fan-out into a single funnel edge
        let g = graph_of(&[(0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (3, 4), (4, 5)]);
        assert_eq!(count_disjoint(&g, 0, 4).unwrap(), 3);
        assert_eq!(count_disjoint(&g, 0, 5).unwrap(), 1);
    }

    #[test]
    fn test_repeated_queries_same_value() {
        let g = graph_of(&[(0, 1), (0, 2), (1, 3), (2, 3), (3, 0)]);
        let edges_before = g.edge_count();
        let first = count_disjoint(&g, 0, 3).unwrap();
        for _ in 0..5 {
            assert_eq!(count_disjoint(&g, 0, 3).unwrap(), first);
        }
        assert_eq!(first, 2);
        assert_eq!(g.edge_count(), edges_before);
    }

    #[test]
    fn test_residual_mode_same_node_untouched() {
        let g = make_triangle();
        let r = residual_graph(&g, 1, 1).unwrap();
        assert_eq!(r, ResidualGraph::from_graph(&g));
    }

    #[test]
    fn test_residual_mode_cuts_source() {
        let g = make_triangle();
        let r = residual_graph(&g, 1, 2).unwrap();
        let one = g.index_of(1).unwrap();
        assert!(r.successors(one).is_empty());
        assert_eq!(r.edge_count(), g.edge_count());
    }

    #[test]
    fn test_max_flow_reports_paths() {
        let g = graph_of(&[(0, 1), (1, 2), (0, 2)]);
        let flow = max_flow(&g, 0, g.index_of(2).unwrap());
        assert_eq!(flow.paths, 2);
        assert_eq!(count_disjoint_dense(&g, 0, 0), 0);
    }
}
