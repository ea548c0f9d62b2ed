//! Interlacement (conflict) graph over the segments of one cycle.
//!
//! Two segments interlace when they cannot be drawn on the same side of the
//! cycle: they share three or more attachments, or their attachments
//! alternate around the cycle. The graph is bipartite iff the segments can
//! be split into an inside and an outside group.

use crate::graph::Graph;
use crate::segment::Segment;

/// Side of the cycle a segment is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Inside,
    Outside,
}

/// Slot label per cycle position for one attachment set (ascending positions).
///
/// Attachment `k` gets `2k`; the open arc ending at attachment `k` gets
/// `2k - 1`; the arc that wraps past the last attachment gets `2t - 1`.
fn slot_labels(cycle_len: usize, attachments: &[usize]) -> Vec<usize> {
    let t = attachments.len();
    let mut labels = vec![0; cycle_len];
    let mut found = 0;
    for (pos, label) in labels.iter_mut().enumerate() {
        if found < t && attachments[found] == pos {
            *label = 2 * found;
            found += 1;
        } else if found == 0 || found == t {
            *label = 2 * t - 1;
        } else {
            *label = 2 * found - 1;
        }
    }
    debug_assert_eq!(found, t);
    labels
}

/// True iff every position marked in `hit` lies in one closed slot
/// `{2k, 2k+1, 2k+2}` (indices mod `hit.len()`).
fn within_one_slot(hit: &[bool]) -> bool {
    let m = hit.len();
    let total = hit.iter().filter(|&&h| h).count();
    (0..m).step_by(2).any(|k| {
        let inside = (0..3).filter(|&d| hit[(k + d) % m]).count();
        inside == total
    })
}

/// Conflict test for a pair of attachment sets on a cycle of `cycle_len` nodes.
pub fn attachments_interlace(cycle_len: usize, a: &[usize], b: &[usize]) -> bool {
    let labels = slot_labels(cycle_len, a);
    let mut hit = vec![false; 2 * a.len()];
    for &p in b {
        hit[labels[p]] = true;
    }
    !within_one_slot(&hit)
}

/// Graph whose nodes are segment indices; edges join interlacing segments.
#[derive(Clone, Debug)]
pub struct InterlacementGraph {
    graph: Graph,
}

impl InterlacementGraph {
    /// Evaluate every unordered pair once.
    pub fn new(cycle_len: usize, segments: &[Segment]) -> Self {
        let mut graph = Graph::new(segments.len());
        let mut hit = Vec::new();
        for (i, si) in segments.iter().enumerate() {
            let labels = slot_labels(cycle_len, si.attachments());
            for (j, sj) in segments.iter().enumerate().skip(i + 1) {
                hit.clear();
                hit.resize(2 * si.attachments().len(), false);
                for &p in sj.attachments() {
                    hit[labels[p]] = true;
                }
                if !within_one_slot(&hit) {
                    graph.add_edge(i, j);
                }
            }
        }
        Self { graph }
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn interlaces(&self, i: usize, j: usize) -> bool {
        self.graph.has_edge(i, j)
    }

    /// Inside/outside assignment, or `None` if the conflicts contain an odd cycle.
    pub fn bipartition(&self) -> Option<Vec<Side>> {
        let colors = self.graph.two_coloring()?;
        Some(
            colors
                .into_iter()
                .map(|c| if c == 0 { Side::Inside } else { Side::Outside })
                .collect(),
        )
    }
}
