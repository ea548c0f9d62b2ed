//! Trace hooks for the embedder.
//!
//! The algorithm never logs on its own. Callers that want to follow the
//! recursion plug in an observer; `TracingObserver` forwards every event to
//! `tracing` with structured fields.

use crate::component::Component;
use crate::cycle::Cycle;
use crate::segment::Segment;

/// Events emitted while embedding. All methods default to no-ops.
///
/// `depth` is the number of enclosing segment frames (0 for a biconnected
/// component of the input graph). Node ids are local to the frame.
pub trait EmbedObserver {
    fn component_found(&mut self, _index: usize, _component: &Component) {}
    fn cycle_found(&mut self, _depth: usize, _cycle: &Cycle) {}
    fn segments_found(&mut self, _depth: usize, _segments: &[Segment]) {}
    fn cycle_repaired(&mut self, _depth: usize, _cycle: &Cycle) {}
    fn not_planar(&mut self, _depth: usize, _segments: &[Segment]) {}
}

impl<O: EmbedObserver + ?Sized> EmbedObserver for &mut O {
    fn component_found(&mut self, index: usize, component: &Component) {
        (**self).component_found(index, component);
    }
    fn cycle_found(&mut self, depth: usize, cycle: &Cycle) {
        (**self).cycle_found(depth, cycle);
    }
    fn segments_found(&mut self, depth: usize, segments: &[Segment]) {
        (**self).segments_found(depth, segments);
    }
    fn cycle_repaired(&mut self, depth: usize, cycle: &Cycle) {
        (**self).cycle_repaired(depth, cycle);
    }
    fn not_planar(&mut self, depth: usize, segments: &[Segment]) {
        (**self).not_planar(depth, segments);
    }
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl EmbedObserver for NoopObserver {}

/// Emits `tracing` events (debug level; the non-planarity verdict at info).
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl EmbedObserver for TracingObserver {
    fn component_found(&mut self, index: usize, component: &Component) {
        tracing::debug!(
            index,
            nodes = component.size(),
            edges = component.graph().edge_count(),
            labels = ?component.labels(),
            "component_found"
        );
    }

    fn cycle_found(&mut self, depth: usize, cycle: &Cycle) {
        tracing::debug!(depth, len = cycle.len(), nodes = ?cycle.nodes(), "cycle_found");
    }

    fn segments_found(&mut self, depth: usize, segments: &[Segment]) {
        let chords = segments.iter().filter(|s| s.is_chord()).count();
        let attachments: Vec<&[usize]> = segments.iter().map(Segment::attachments).collect();
        tracing::debug!(
            depth,
            segments = segments.len(),
            chords,
            attachments = ?attachments,
            "segments_found"
        );
    }

    fn cycle_repaired(&mut self, depth: usize, cycle: &Cycle) {
        tracing::debug!(depth, len = cycle.len(), nodes = ?cycle.nodes(), "cycle_repaired");
    }

    fn not_planar(&mut self, depth: usize, segments: &[Segment]) {
        tracing::info!(depth, segments = segments.len(), "not_planar");
    }
}
