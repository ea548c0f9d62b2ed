//! Error types for graph construction, loading and embedding.
//!
//! Only `EmbedError::NotPlanar` is an algorithmic outcome. Broken internal
//! invariants (a segment with a single attachment, a cycle repair that does
//! not split the segment) are bugs and panic instead.

use thiserror::Error;

/// Failure of the embedder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// Some interlacement graph has an odd cycle.
    #[error("graph is not planar")]
    NotPlanar,
}

/// Rejected edge insertion on a validated path (`Graph::try_add_edge`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {size} nodes")]
    NodeOutOfRange { node: usize, size: usize },

    #[error("self-loop on node {node}")]
    SelfLoop { node: usize },

    #[error("duplicate edge {u}-{v}")]
    DuplicateEdge { u: usize, v: usize },
}

/// Errors raised while reading the edge-list text format.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("missing node count")]
    MissingNodeCount,

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

/// Convenience alias for embedder results.
pub type Result<T> = std::result::Result<T, EmbedError>;
