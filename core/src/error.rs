//! Error type for link-resilience-core.
//!
//! Unreachable pairs, single-node graphs and ties between minimal cuts are
//! ordinary result values; only contract violations surface here.

use thiserror::Error;

use crate::graph::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A query named a node id that is not part of the graph.
    #[error("no node {0} in graph")]
    UnknownNode(NodeId),

    /// An adjacency list references a node that was never declared.
    #[error("node {node} is referenced by node {referenced_by} but not declared")]
    UndeclaredNode { node: NodeId, referenced_by: NodeId },
}

pub type Result<T> = std::result::Result<T, Error>;
