use std::collections::{BTreeMap, VecDeque};

use link_resilience_core::{
    count_disjoint, link_connectivity, statistics, Graph, GraphBuilder, Link, LinkConnectivity,
};
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

const MAX_NODES: u64 = 6;

fn build(node_count: u64, edges: &[(u64, u64)]) -> Graph {
    let mut b = GraphBuilder::new();
    for id in 0..node_count {
        b.add_node(id);
    }
    b.load_edges(
        edges
            .iter()
            .map(|&(a, c)| (a % node_count, c % node_count)),
    );
    b.build()
}

fn to_petgraph(g: &Graph) -> DiGraph<(), ()> {
    let mut pg = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..g.node_count()).map(|_| pg.add_node(())).collect();
    for u in 0..g.node_count() {
        for &v in g.successors(u) {
            pg.add_edge(nodes[u], nodes[v], ());
        }
    }
    pg
}

/// BFS reachability over `links`, ignoring the ones flagged in `removed`.
fn reaches(links: &[Link], removed: u32, from: u64, to: u64) -> bool {
    let mut adj: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    for (i, l) in links.iter().enumerate() {
        if removed & (1 << i) == 0 {
            adj.entry(l.from).or_default().push(l.to);
        }
    }
    let mut seen = vec![from];
    let mut queue = VecDeque::from([from]);
    while let Some(node) = queue.pop_front() {
        if node == to {
            return true;
        }
        for &next in adj.get(&node).map(Vec::as_slice).unwrap_or(&[]) {
            if !seen.contains(&next) {
                seen.push(next);
                queue.push_back(next);
            }
        }
    }
    false
}

/// Smallest number of links whose removal disconnects `to` from `from`,
/// by exhaustive search over link subsets.
fn brute_force_min_cut(g: &Graph, from: u64, to: u64) -> usize {
    let links: Vec<Link> = g.links().collect();
    assert!(links.len() < 32);
    let mut best = links.len();
    for removed in 0u32..(1 << links.len()) {
        let size = removed.count_ones() as usize;
        if size < best && !reaches(&links, removed, from, to) {
            best = size;
        }
    }
    best
}

fn arb_graph() -> impl Strategy<Value = Graph> {
    (2..=MAX_NODES, prop::collection::vec((0..MAX_NODES, 0..MAX_NODES), 0..12))
        .prop_map(|(n, edges)| build(n, &edges))
}

fn arb_graph_and_pair() -> impl Strategy<Value = (Graph, u64, u64)> {
    arb_graph().prop_flat_map(|g| {
        let n = g.node_count() as u64;
        (Just(g), 0..n, 0..n).prop_filter("distinct pair", |(_, a, b)| a != b)
    })
}

proptest! {
    #[test]
    fn prop_count_bounded_by_degrees((g, a, b) in arb_graph_and_pair()) {
        let k = count_disjoint(&g, a, b).unwrap();
        let (ia, ib) = (g.index_of(a).unwrap(), g.index_of(b).unwrap());
        let bound = g.out_degree(ia).min(g.in_degrees()[ib]);
        prop_assert!(k <= bound, "k={} bound={}", k, bound);
    }

    #[test]
    fn prop_zero_iff_unreachable((g, a, b) in arb_graph_and_pair()) {
        let pg = to_petgraph(&g);
        let (ia, ib) = (g.index_of(a).unwrap(), g.index_of(b).unwrap());
        let reachable = has_path_connecting(&pg, NodeIndex::new(ia), NodeIndex::new(ib), None);
        let k = count_disjoint(&g, a, b).unwrap();
        prop_assert_eq!(k == 0, !reachable);
    }

    #[test]
    fn prop_count_matches_brute_force_min_cut((g, a, b) in arb_graph_and_pair()) {
        let k = count_disjoint(&g, a, b).unwrap();
        prop_assert_eq!(k, brute_force_min_cut(&g, a, b));
    }

    #[test]
    fn prop_queries_leave_graph_unchanged((g, a, b) in arb_graph_and_pair()) {
        let before: Vec<Link> = g.links().collect();
        let first = count_disjoint(&g, a, b).unwrap();
        let second = count_disjoint(&g, a, b).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(g.links().collect::<Vec<_>>(), before);
    }

    #[test]
    fn prop_statistics_matches_pairwise_counts(g in arb_graph()) {
        let dist = statistics(&g);
        prop_assert_eq!(dist.total_pairs(), g.pair_count());
        prop_assert_eq!(dist.connected_pairs() + dist.unreachable(), g.pair_count());

        let mut expected: BTreeMap<usize, usize> = BTreeMap::new();
        for &a in g.node_ids() {
            for &b in g.node_ids() {
                if a != b {
                    let k = count_disjoint(&g, a, b).unwrap();
                    if k > 0 {
                        *expected.entry(k).or_insert(0) += 1;
                    }
                }
            }
        }
        prop_assert_eq!(dist.buckets(), &expected);
    }

    #[test]
    fn prop_connectivity_witness_is_a_real_cut(g in arb_graph()) {
        let mut min_k = usize::MAX;
        for &a in g.node_ids() {
            for &b in g.node_ids() {
                if a != b {
                    min_k = min_k.min(count_disjoint(&g, a, b).unwrap());
                }
            }
        }

        match link_connectivity(&g) {
            LinkConnectivity::SingleNode => prop_assert!(false, "graph has at least two nodes"),
            LinkConnectivity::NotStronglyConnected { from, to } => {
                prop_assert_eq!(min_k, 0);
                prop_assert_eq!(count_disjoint(&g, from, to).unwrap(), 0);
            }
            LinkConnectivity::Connected { min_k: k, from, to, cut } => {
                prop_assert_eq!(k, min_k);
                prop_assert_eq!(count_disjoint(&g, from, to).unwrap(), k);
                prop_assert_eq!(cut.len(), k);

                let links: Vec<Link> = g.links().collect();
                let mut removed = 0u32;
                for link in &cut {
                    let pos = links.iter().position(|l| l == link);
                    prop_assert!(pos.is_some(), "cut link {:?} is not in the graph", link);
                    removed |= 1 << pos.unwrap_or(0);
                }
                prop_assert!(!reaches(&links, removed, from, to));
            }
        }
    }
}
