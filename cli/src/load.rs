//! Edge-list loader.
//!
//! Format: the first line holds the node count, every further non-blank
//! line holds two whitespace-separated node ids `tail head`, meaning tail
//! can reach head. Every id that appears in an edge becomes a node.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use link_resilience_core::{Graph, GraphBuilder, NodeId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read graph data: {0}")]
    Read(#[from] std::io::Error),

    #[error("graph file is empty, expected a node count on the first line")]
    MissingHeader,

    #[error("line 1: node count '{0}' is not a non-negative integer")]
    InvalidHeader(String),

    #[error("line {line}: malformed line, expected two node ids but found {found} field(s)")]
    MalformedLine { line: usize, found: usize },

    #[error("line {line}: '{value}' is not a valid node id")]
    InvalidNodeId { line: usize, value: String },

    #[error("loaded graph uses {used_mb}MB, exceeds max_memory_mb={max_mb}MB")]
    MemoryLimit { used_mb: usize, max_mb: usize },
}

/// A parsed graph plus load metadata.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph,
    /// Node count announced on the header line.
    pub declared_nodes: usize,
    pub load_time_ms: f64,
}

/// Upper bound on nodes preallocated from the header, which is not trusted.
const MAX_PREALLOCATED_NODES: usize = 1 << 16;

fn parse_id(field: &str, line: usize) -> Result<NodeId, LoadError> {
    field.parse().map_err(|_| LoadError::InvalidNodeId {
        line,
        value: field.to_string(),
    })
}

/// Parse an edge list from any buffered reader.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<LoadedGraph, LoadError> {
    let start = Instant::now();
    let mut lines = reader.lines();

    let header = lines.next().ok_or(LoadError::MissingHeader)??;
    let header = header.trim();
    if header.is_empty() {
        return Err(LoadError::MissingHeader);
    }
    let declared_nodes: usize = header
        .parse()
        .map_err(|_| LoadError::InvalidHeader(header.to_string()))?;

    let capacity = declared_nodes.min(MAX_PREALLOCATED_NODES);
    let mut builder = GraphBuilder::with_capacity(capacity, capacity);
    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [tail, head] => {
                let tail = parse_id(tail, line_no)?;
                let head = parse_id(head, line_no)?;
                builder.add_edge(tail, head);
            }
            other => {
                return Err(LoadError::MalformedLine {
                    line: line_no,
                    found: other.len(),
                })
            }
        }
    }

    if builder.node_count() != declared_nodes {
        tracing::warn!(
            declared = declared_nodes,
            found = builder.node_count(),
            "header node count does not match the ids used by edges"
        );
    }

    Ok(LoadedGraph {
        graph: builder.build(),
        declared_nodes,
        load_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

/// Load an edge-list file, enforcing an optional memory cap in megabytes.
pub fn load_graph(path: &Path, max_memory_mb: Option<usize>) -> Result<LoadedGraph, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = parse_edge_list(BufReader::new(file))?;

    let used_mb = loaded.graph.memory_usage() / (1024 * 1024);
    if let Some(max_mb) = max_memory_mb {
        if used_mb > max_mb {
            return Err(LoadError::MemoryLimit { used_mb, max_mb });
        }
    }

    tracing::info!(
        path = %path.display(),
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count(),
        load_time_ms = loaded.load_time_ms,
        "graph loaded"
    );
    Ok(loaded)
}
