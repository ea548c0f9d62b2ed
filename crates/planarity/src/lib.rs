//! Planarity testing and embedding by path addition.
//!
//! Layout
//! - `graph`, `embedding`: undirected simple graphs and rotation systems.
//! - `component`: biconnected decomposition (iterative lowpoint DFS).
//! - `cycle`, `segment`, `interlacement`: the per-cycle structures.
//! - `embedder`: the work-list driver and the rotation merge.
//! - `loader`, `generate`: edge-list text input and graph families.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod component;
pub mod cycle;
pub mod embedder;
pub mod embedding;
pub mod error;
pub mod generate;
pub mod graph;
pub mod interlacement;
pub mod loader;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use embedder::{embed, is_planar, EmbedCfg, Embedder};
pub use embedding::Embedding;
pub use error::{EmbedError, GraphError, LoadError};
pub use graph::Graph;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::component::{BiconnectedComponents, Component};
    pub use crate::embedder::{
        embed, is_planar, EmbedCfg, EmbedObserver, Embedder, NoopObserver, TracingObserver,
    };
    pub use crate::embedding::Embedding;
    pub use crate::error::{EmbedError, GraphError, LoadError};
    pub use crate::generate::{RandomGraphCfg, ReplayToken};
    pub use crate::graph::Graph;
    pub use crate::loader::{load_graph, parse_graph};
}
