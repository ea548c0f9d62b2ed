//! Biconnected components: re-indexed subgraphs and the lowpoint sweep.
//!
//! Purpose
//! - Split a graph into its biconnected components and cut vertices so the
//!   embedder can work on one 2-connected piece at a time.
//!
//! Layout
//! - `types.rs`: `Component` (graph plus label map) and the result container.
//! - `dfs.rs`: the iterative DFS with discovery ids, lowpoints and spliceable
//!   pending node/edge lists.

mod dfs;
mod types;

pub use types::{BiconnectedComponents, Component};
pub(crate) use types::UNMAPPED;
