//! Path-addition embedder.
//!
//! Purpose
//! - Decide planarity and build a rotation system for planar inputs.
//!
//! Flow
//! - Graph: split into biconnected components, embed each, glue the results
//!   at cut vertices (one contiguous block per component).
//! - Component: find a cycle, split the rest into segments, 2-colour the
//!   interlacement graph, embed every segment (cycle included) and merge.
//!   A single non-path segment triggers one cycle repair first.
//!
//! Layout
//! - `frame.rs`: the per-component state machine on an explicit work-list.
//! - `merge.rs`: base-case rotations, segment merge, cut-vertex glue.
//! - `observer.rs`: trace hooks (`EmbedObserver`, `TracingObserver`).

mod frame;
mod merge;
mod observer;

pub use observer::{EmbedObserver, NoopObserver, TracingObserver};

use crate::component::{BiconnectedComponents, Component};
use crate::embedding::Embedding;
use crate::error::Result;
use crate::graph::Graph;

/// Embedder configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbedCfg {
    /// Check every finished frame against its graph and Euler's formula;
    /// a failed check panics. Off by default (quadratic in the worst case).
    pub verify_rotations: bool,
}

/// Embedder with a configuration and an observer.
#[derive(Clone, Debug, Default)]
pub struct Embedder<O = NoopObserver> {
    cfg: EmbedCfg,
    observer: O,
}

impl Embedder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: EmbedObserver> Embedder<O> {
    pub fn with_observer(cfg: EmbedCfg, observer: O) -> Self {
        Self { cfg, observer }
    }

    #[inline]
    pub fn cfg(&self) -> EmbedCfg {
        self.cfg
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Embed an arbitrary simple graph.
    ///
    /// Components are embedded in decomposition order; the first
    /// non-planar component ends the run.
    pub fn embed(&mut self, graph: &Graph) -> Result<Embedding> {
        if graph.size() < 4 {
            return Ok(merge::adjacency_rotation(graph));
        }
        let bcc = BiconnectedComponents::compute(graph);
        let mut parts = Vec::with_capacity(bcc.components().len());
        for (index, component) in bcc.components().iter().enumerate() {
            self.observer.component_found(index, component);
            parts.push(self.embed_component(component)?);
        }
        Ok(merge::glue_components(graph.size(), bcc.components(), &parts))
    }

    /// Embed one biconnected component; the result uses its local ids.
    pub fn embed_component(&mut self, component: &Component) -> Result<Embedding> {
        self.run_worklist(component.graph().clone())
    }
}

/// Embed with the default configuration and no observer.
pub fn embed(graph: &Graph) -> Result<Embedding> {
    Embedder::new().embed(graph)
}

/// Planarity verdict only.
pub fn is_planar(graph: &Graph) -> bool {
    embed(graph).is_ok()
}

#[cfg(test)]
mod tests;
