//! Segments and chords of a component relative to a cycle.
//!
//! A segment is one connected piece of the component left after removing
//! the cycle, together with the edges that attach it to the cycle. A chord
//! is a single edge between two non-consecutive cycle nodes. Both carry the
//! full cycle: segment-local ids `0..cycle_len` are the cycle nodes in cycle
//! order, so a local cycle id is its cycle position. Private nodes follow.

use std::collections::VecDeque;

use crate::component::{Component, UNMAPPED};
use crate::cycle::Cycle;
use crate::graph::Graph;

/// One segment (or chord) with its attachment bookkeeping.
#[derive(Clone, Debug)]
pub struct Segment {
    component: Component,
    cycle_len: usize,
    attachments: Vec<usize>,
    is_attachment: Vec<bool>,
}

#[inline]
fn consecutive(p: usize, q: usize, len: usize) -> bool {
    (p + 1) % len == q || (q + 1) % len == p
}

impl Segment {
    /// `extra` holds the non-cycle edges in parent ids; `private` the
    /// segment's own off-cycle nodes. `local` is the parent-sized
    /// relabelling scratch, all `UNMAPPED`.
    fn build(
        cycle: &Cycle,
        private: &[usize],
        extra: &[(usize, usize)],
        local: &mut [usize],
    ) -> Self {
        let len = cycle.len();
        let labels = cycle.nodes().iter().chain(private).copied();
        let cycle_edges = (0..len).map(|i| (cycle.node_at(i), cycle.node_at((i + 1) % len)));
        let component = Component::relabel(labels, cycle_edges.chain(extra.iter().copied()), local);
        let is_attachment: Vec<bool> = (0..component.size())
            .map(|v| v < len && component.graph().degree(v) > 2)
            .collect();
        let attachments: Vec<usize> = (0..len).filter(|&v| is_attachment[v]).collect();
        assert!(
            attachments.len() >= 2,
            "segment with {} attachment(s); component is not biconnected",
            attachments.len()
        );
        Self {
            component,
            cycle_len: len,
            attachments,
            is_attachment,
        }
    }

    #[inline]
    pub fn component(&self) -> &Component {
        &self.component
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        self.component.graph()
    }

    /// Node count; stays valid after the graph was handed to the embedder.
    #[inline]
    pub fn size(&self) -> usize {
        self.component.labels().len()
    }

    /// Id in the enclosing component.
    #[inline]
    pub fn label(&self, local: usize) -> usize {
        self.component.label(local)
    }

    #[inline]
    pub fn cycle_len(&self) -> usize {
        self.cycle_len
    }

    /// Local ids of the attachments, ascending. They double as cycle positions.
    #[inline]
    pub fn attachments(&self) -> &[usize] {
        &self.attachments
    }

    #[inline]
    pub fn is_attachment(&self, local: usize) -> bool {
        self.is_attachment[local]
    }

    pub fn is_chord(&self) -> bool {
        self.size() == self.cycle_len
    }

    /// True iff no node outside the attachments branches, i.e. the private
    /// part is a single path (or the chord edge).
    pub fn is_path(&self) -> bool {
        let g = self.graph();
        (0..self.size()).all(|v| self.is_attachment[v] || g.degree(v) <= 2)
    }

    /// Shortest path from attachment `a` to attachment `b` that avoids cycle
    /// edges and touches the cycle only at its endpoints, as local ids.
    pub fn path_between_attachments(&self, a: usize, b: usize) -> Option<Vec<usize>> {
        assert!(self.is_attachment(a) && self.is_attachment(b) && a != b);
        let g = self.graph();
        let len = self.cycle_len;
        let mut prev: Vec<Option<usize>> = vec![None; self.size()];
        let mut queue = VecDeque::from([a]);
        prev[a] = Some(a);
        while let Some(v) = queue.pop_front() {
            for &w in g.neighbors(v) {
                if prev[w].is_some() {
                    continue;
                }
                let on_cycle = w < len;
                if on_cycle && (w != b || (v < len && consecutive(v, w, len))) {
                    continue;
                }
                prev[w] = Some(v);
                if w == b {
                    let mut path = vec![b];
                    let mut cur = b;
                    while cur != a {
                        cur = prev[cur]?;
                        path.push(cur);
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(w);
            }
        }
        None
    }

    pub(crate) fn take_component_graph(&mut self) -> Graph {
        self.component.take_graph()
    }
}

/// Segments and chords of a component for one cycle, in a stable order:
/// pieces in discovery order, then chords.
#[derive(Clone, Debug, Default)]
pub struct SegmentSet {
    segments: Vec<Segment>,
}

impl SegmentSet {
    pub fn find(graph: &Graph, cycle: &Cycle) -> Self {
        let n = graph.size();
        let mut seen = vec![false; n];
        let mut local = vec![UNMAPPED; n];
        let mut segments = Vec::new();
        let mut stack = Vec::new();
        for root in 0..n {
            if cycle.contains(root) || seen[root] {
                continue;
            }
            let mut private = Vec::new();
            let mut extra = Vec::new();
            seen[root] = true;
            stack.push(root);
            while let Some(v) = stack.pop() {
                private.push(v);
                for &w in graph.neighbors(v) {
                    if cycle.contains(w) {
                        extra.push((v, w));
                        continue;
                    }
                    if v < w {
                        extra.push((v, w));
                    }
                    if !seen[w] {
                        seen[w] = true;
                        stack.push(w);
                    }
                }
            }
            segments.push(Segment::build(cycle, &private, &extra, &mut local));
        }
        let len = cycle.len();
        for (p, &u) in cycle.nodes().iter().enumerate() {
            for &w in graph.neighbors(u) {
                match cycle.position(w) {
                    Some(q) if p < q && !consecutive(p, q, len) => {
                        segments.push(Segment::build(cycle, &[], &[(u, w)], &mut local));
                    }
                    _ => {}
                }
            }
        }
        Self { segments }
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn into_vec(self) -> Vec<Segment> {
        self.segments
    }
}
