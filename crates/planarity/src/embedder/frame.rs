//! Per-component state machine on an explicit work-list.
//!
//! States: `NoCycleYet -> HaveCycle -> (repair -> HaveCycle) -> done | split`.
//! A split frame waits on the heap stack while its segments are embedded one
//! after another; the first failure unwinds the whole work-list through `?`.

use crate::cycle::Cycle;
use crate::embedding::Embedding;
use crate::error::{EmbedError, Result};
use crate::graph::Graph;
use crate::interlacement::{InterlacementGraph, Side};
use crate::segment::{Segment, SegmentSet};

use super::merge;
use super::observer::EmbedObserver;
use super::Embedder;

/// A component split into >= 2 segments, waiting for their embeddings.
struct Split {
    graph: Graph,
    cycle: Cycle,
    segments: Vec<Segment>,
    sides: Vec<Side>,
    done: Vec<Embedding>,
}

impl Split {
    /// Hand out the graph of the next segment to embed, if any is left.
    fn take_next(&mut self) -> Option<Graph> {
        let i = self.done.len();
        self.segments.get_mut(i).map(Segment::take_component_graph)
    }
}

enum Start {
    Done(Embedding),
    Split(Split),
}

/// Swap an arc of `cycle` for a path through `segment` so that the segment
/// falls apart into at least two pieces.
///
/// Uses the first two attachments in cycle order; when a third exists the
/// new cycle must keep it.
fn make_cycle_good(cycle: &mut Cycle, segment: &Segment) {
    let att = segment.attachments();
    let (a, b) = (att[0], att[1]);
    let include = att.get(2).map(|&q| segment.label(q));
    let Some(path) = segment.path_between_attachments(a, b) else {
        panic!("no private path between attachments {a} and {b}");
    };
    let path: Vec<usize> = path.into_iter().map(|v| segment.label(v)).collect();
    cycle.change_with_path(&path, include);
}

impl<O: EmbedObserver> Embedder<O> {
    /// Embed a biconnected graph (a component or a segment).
    pub(super) fn run_worklist(&mut self, root: Graph) -> Result<Embedding> {
        let mut stack: Vec<Split> = Vec::new();
        let mut fresh = root;
        loop {
            let mut finished = match self.start(fresh, stack.len())? {
                Start::Done(e) => e,
                Start::Split(mut split) => {
                    let Some(first) = split.take_next() else {
                        unreachable!("a split has at least two segments");
                    };
                    fresh = first;
                    stack.push(split);
                    continue;
                }
            };
            loop {
                let Some(mut top) = stack.pop() else {
                    return Ok(finished);
                };
                top.done.push(finished);
                if let Some(next) = top.take_next() {
                    fresh = next;
                    stack.push(top);
                    break;
                }
                finished = self.finish(top);
            }
        }
    }

    fn start(&mut self, graph: Graph, depth: usize) -> Result<Start> {
        if graph.size() < 4 {
            let e = merge::adjacency_rotation(&graph);
            return Ok(Start::Done(self.checked(e, &graph)));
        }
        let mut cycle = Cycle::find(&graph);
        self.observer.cycle_found(depth, &cycle);
        let mut repaired = false;
        loop {
            let set = SegmentSet::find(&graph, &cycle);
            self.observer.segments_found(depth, set.segments());
            match set.segments() {
                [] => {
                    let e = merge::around_cycle(&graph, &cycle);
                    return Ok(Start::Done(self.checked(e, &graph)));
                }
                [only] if only.is_path() => {
                    let e = merge::around_cycle(&graph, &cycle);
                    return Ok(Start::Done(self.checked(e, &graph)));
                }
                [only] => {
                    assert!(!repaired, "cycle repair left a single segment");
                    make_cycle_good(&mut cycle, only);
                    repaired = true;
                    self.observer.cycle_repaired(depth, &cycle);
                }
                segments => {
                    let conflicts = InterlacementGraph::new(cycle.len(), segments);
                    let Some(sides) = conflicts.bipartition() else {
                        self.observer.not_planar(depth, segments);
                        return Err(EmbedError::NotPlanar);
                    };
                    return Ok(Start::Split(Split {
                        graph,
                        cycle,
                        segments: set.into_vec(),
                        sides,
                        done: Vec::new(),
                    }));
                }
            }
        }
    }

    fn finish(&mut self, split: Split) -> Embedding {
        let Split {
            graph,
            cycle,
            segments,
            sides,
            done,
        } = split;
        let e = merge::merge_segments(graph.size(), &cycle, &segments, &sides, done);
        self.checked(e, &graph)
    }

    /// Optional self-check of every finished frame.
    fn checked(&self, e: Embedding, graph: &Graph) -> Embedding {
        if self.cfg.verify_rotations {
            assert!(e.matches_graph(graph), "rotation does not match its graph");
            assert!(e.is_planar_rotation(), "rotation violates Euler's formula");
        }
        e
    }
}
