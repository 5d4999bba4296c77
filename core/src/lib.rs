//! link-resilience-core: fault-tolerance analysis for directed topologies.
//!
//! Counts edge-disjoint paths between node pairs with a unit-capacity
//! max-flow (Edmonds-Karp over a residual copy of the graph), aggregates the
//! counts over every ordered pair into a resilience distribution, and finds
//! the graph's directed edge-connectivity together with a witness cut-set.
//! No I/O: graphs are built in memory and passed by reference.

mod connectivity;
mod error;
mod flow;
mod graph;
mod residual;
mod stats;
mod traversal;

pub use connectivity::{link_connectivity, witness_cut, LinkConnectivity};
pub use error::{Error, Result};
pub use flow::{count_disjoint, count_disjoint_dense, max_flow, residual_graph, MaxFlow};
pub use graph::{Graph, GraphBuilder, Link, NodeId, NodeIndex};
pub use residual::ResidualGraph;
pub use stats::{statistics, CumulativeRow, ResilienceDistribution, DEFAULT_BAR_WIDTH};
pub use traversal::{find_augmenting_path, reachable_set, AugmentingPath, Hop};
