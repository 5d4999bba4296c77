//! Resilience distribution over all ordered node pairs.
//!
//! Every ordered pair `(a, b)` with `a != b` is run through the disjoint-path
//! counter and bucketed by its value `k`. The cumulative view answers: what
//! fraction of pairs survives any `k - 1` link failures?

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::flow::count_disjoint_dense;
use crate::graph::{Graph, NodeIndex};

/// Default width of the histogram bars in [`ResilienceDistribution::render`].
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Count of ordered pairs per disjoint-path value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResilienceDistribution {
    total_pairs: usize,
    unreachable: usize,
    /// `k -> number of pairs whose value is exactly k`, only for `k >= 1`.
    buckets: BTreeMap<usize, usize>,
}

/// One line of the cumulative curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CumulativeRow {
    pub k: usize,
    /// Pairs with at least `k` edge-disjoint paths.
    pub at_least: usize,
    /// `at_least / total_pairs`.
    pub fraction: f64,
}

impl ResilienceDistribution {
    /// Empty distribution over `total_pairs` ordered pairs.
    pub fn new(total_pairs: usize) -> Self {
        Self {
            total_pairs,
            ..Self::default()
        }
    }

    /// Record one pair with value `k`. Buckets are created on first use.
    pub fn record(&mut self, k: usize) {
        if k == 0 {
            self.unreachable += 1;
        } else {
            *self.buckets.entry(k).or_insert(0) += 1;
        }
    }

    /// Associative, commutative merge of two partial tallies.
    pub fn merge(mut self, other: Self) -> Self {
        self.total_pairs += other.total_pairs;
        self.unreachable += other.unreachable;
        for (k, count) in other.buckets {
            *self.buckets.entry(k).or_insert(0) += count;
        }
        self
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    pub fn unreachable(&self) -> usize {
        self.unreachable
    }

    /// Pairs with at least one path.
    pub fn connected_pairs(&self) -> usize {
        self.buckets.values().sum()
    }

    /// Pairs whose value is exactly `k` (`k >= 1`).
    pub fn bucket(&self, k: usize) -> usize {
        self.buckets.get(&k).copied().unwrap_or(0)
    }

    pub fn buckets(&self) -> &BTreeMap<usize, usize> {
        &self.buckets
    }

    /// Largest observed k, if any pair is connected.
    pub fn max_k(&self) -> Option<usize> {
        self.buckets.keys().next_back().copied()
    }

    /// Fraction of pairs with at least `k` disjoint paths, for `k = 1..=max_k`.
    ///
    /// Empty when there are no pairs or no connected pair.
    pub fn cumulative(&self) -> Vec<CumulativeRow> {
        let Some(max_k) = self.max_k() else {
            return Vec::new();
        };
        if self.total_pairs == 0 {
            return Vec::new();
        }

        let mut remaining = self.connected_pairs();
        let mut rows = Vec::with_capacity(max_k);
        for k in 1..=max_k {
            rows.push(CumulativeRow {
                k,
                at_least: remaining,
                fraction: remaining as f64 / self.total_pairs as f64,
            });
            // a pair with exactly k paths no longer counts toward k + 1
            remaining -= self.bucket(k);
        }
        rows
    }

    /// Text bar chart of [`Self::cumulative`]. Empty string when there are no rows.
    pub fn render(&self, bar_width: usize) -> String {
        let rows = self.cumulative();
        let Some(last) = rows.last() else {
            return String::new();
        };
        let width = last.k.to_string().len();

        let mut out = format!(
            " {:>width$}  fraction of pairs with at least k link-disjoint paths between them\n",
            "k"
        );
        for row in &rows {
            let bars = (row.fraction * bar_width as f64) as usize;
            out.push_str(&format!(
                " {:>width$}  {} {:.2}\n",
                row.k,
                "|".repeat(bars),
                row.fraction
            ));
        }
        out
    }
}

impl fmt::Display for ResilienceDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_BAR_WIDTH))
    }
}

/// Tally every pair that starts at `source`.
fn tally_row(graph: &Graph, source: NodeIndex) -> ResilienceDistribution {
    let mut row = ResilienceDistribution::default();
    for dest in 0..graph.node_count() {
        if dest != source {
            row.record(count_disjoint_dense(graph, source, dest));
        }
    }
    row
}

/// Run the disjoint-path counter over every ordered pair.
///
/// O(N^2 (V+E)): the pair enumeration dominates. Rows are independent and,
/// with the `parallel` feature, computed on the rayon pool.
pub fn statistics(graph: &Graph) -> ResilienceDistribution {
    let n = graph.node_count();
    let _span = tracing::info_span!("statistics", nodes = n, edges = graph.edge_count()).entered();

    #[cfg(feature = "parallel")]
    let tally = (0..n)
        .into_par_iter()
        .map(|source| tally_row(graph, source))
        .reduce(ResilienceDistribution::default, ResilienceDistribution::merge);

    #[cfg(not(feature = "parallel"))]
    let tally = (0..n)
        .map(|source| tally_row(graph, source))
        .fold(ResilienceDistribution::default(), ResilienceDistribution::merge);

    let dist = ResilienceDistribution {
        total_pairs: graph.pair_count(),
        ..tally
    };

    tracing::info!(
        pairs = dist.total_pairs,
        unreachable = dist.unreachable,
        max_k = ?dist.max_k(),
        "resilience distribution computed"
    );
    dist
}
