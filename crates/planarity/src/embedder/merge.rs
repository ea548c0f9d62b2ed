//! Rotation construction: base cases, segment merge and cut-vertex glue.
//!
//! Convention used throughout: at a cycle node with cycle neighbours `prev`
//! and `next`, the rotation reads `prev, <inside>, next, <outside>`.

use std::cmp::Reverse;

use crate::component::Component;
use crate::cycle::Cycle;
use crate::embedding::Embedding;
use crate::graph::Graph;
use crate::interlacement::Side;
use crate::segment::Segment;

/// Neighbour lists as rotations. Valid for graphs with at most 3 nodes.
pub(super) fn adjacency_rotation(graph: &Graph) -> Embedding {
    Embedding::from_rotations(
        (0..graph.size())
            .map(|v| graph.neighbors(v).to_vec())
            .collect(),
    )
}

/// Cycle with at most one path segment: `[prev, path neighbour, next]` at
/// the attachments, `[prev, next]` elsewhere on the cycle, plain adjacency
/// on the path.
pub(super) fn around_cycle(graph: &Graph, cycle: &Cycle) -> Embedding {
    let mut out = Embedding::new(graph.size());
    for v in 0..graph.size() {
        if !cycle.contains(v) {
            out.set_rotation(v, graph.neighbors(v).to_vec());
            continue;
        }
        let (p, n) = (cycle.prev(v), cycle.next(v));
        let mut rot = vec![p];
        rot.extend(graph.neighbors(v).iter().filter(|&&w| w != p && w != n));
        assert!(rot.len() <= 2, "node {v} has more than one off-cycle edge");
        rot.push(n);
        out.set_rotation(v, rot);
    }
    out
}

/// Neighbours strictly between `from` and `to`, walking the rotation forward.
fn block(rot: &[usize], from: usize, to: usize) -> impl Iterator<Item = usize> + '_ {
    let start = rot.iter().position(|&w| w == from).map_or(rot.len(), |i| i + 1);
    rot.iter()
        .cycle()
        .skip(start)
        .take(rot.len())
        .copied()
        .take_while(move |&w| w != to)
}

/// Mirror `part` if needed so its private block at every attachment runs
/// `prev -> next` (inside) or `next -> prev` (outside).
///
/// The cycle bounds a face of any planar embedding of a segment, so one
/// attachment decides the orientation of the whole part.
fn orient(segment: &Segment, side: Side, part: &mut Embedding) {
    let len = segment.cycle_len();
    let a = segment.attachments()[0];
    let (p, n) = ((a + len - 1) % len, (a + 1) % len);
    let rot = part.ordered_neighbors(a);
    let Some(i) = rot.iter().position(|&w| w == p) else {
        panic!("attachment {a} lost its cycle neighbour {p}");
    };
    let inside_first = rot[(i + 1) % rot.len()] != n;
    if inside_first != (side == Side::Inside) {
        part.mirror();
    }
}

/// Order the segments of one side at cycle position `pos`, from the `prev`
/// end to the `next` end.
///
/// Same-side segments do not interlace, so the offsets `(q - pos) mod len`
/// of their other attachments form nested or disjoint ranges. The one that
/// reaches furthest back along the cycle comes first. Equal ranges only
/// happen for two-attachment segments on the same pair; those are stacked
/// by index, ascending at the lower endpoint and descending at the upper
/// one, so both endpoints agree on the nesting.
fn nesting_order(members: &mut [usize], pos: usize, len: usize, segments: &[Segment]) {
    members.sort_by_key(|&i| {
        let offsets = segments[i]
            .attachments()
            .iter()
            .filter(|&&q| q != pos)
            .map(|&q| (q + len - pos) % len);
        let (lo, hi) = offsets.fold((len, 0), |(lo, hi), d| (lo.min(d), hi.max(d)));
        let partner = (pos + hi) % len;
        let tie = if pos < partner { i as isize } else { -(i as isize) };
        (Reverse(hi), Reverse(lo), tie)
    });
}

/// Combine the embeddings of the segments of one cycle.
///
/// `parts[i]` is the embedding of `segments[i]` in segment-local ids; the
/// result uses the ids of the component the segments were taken from.
pub(super) fn merge_segments(
    size: usize,
    cycle: &Cycle,
    segments: &[Segment],
    sides: &[Side],
    mut parts: Vec<Embedding>,
) -> Embedding {
    let len = cycle.len();
    for ((segment, &side), part) in segments.iter().zip(sides).zip(parts.iter_mut()) {
        orient(segment, side, part);
    }
    let mut out = Embedding::new(size);
    for (segment, part) in segments.iter().zip(&parts) {
        for local in len..segment.size() {
            let rot = part
                .ordered_neighbors(local)
                .iter()
                .map(|&w| segment.label(w))
                .collect();
            out.set_rotation(segment.label(local), rot);
        }
    }
    for pos in 0..len {
        let (prev, next) = ((pos + len - 1) % len, (pos + 1) % len);
        let mut inside = Vec::new();
        let mut outside = Vec::new();
        for (i, segment) in segments.iter().enumerate() {
            if segment.is_attachment(pos) {
                match sides[i] {
                    Side::Inside => inside.push(i),
                    Side::Outside => outside.push(i),
                }
            }
        }
        nesting_order(&mut inside, pos, len, segments);
        // the outside is the inside seen in a mirror
        nesting_order(&mut outside, pos, len, segments);
        outside.reverse();

        let mut rot = vec![cycle.node_at(prev)];
        for &i in &inside {
            let rot_i = parts[i].ordered_neighbors(pos);
            rot.extend(block(rot_i, prev, next).map(|w| segments[i].label(w)));
        }
        rot.push(cycle.node_at(next));
        for &i in &outside {
            let rot_i = parts[i].ordered_neighbors(pos);
            rot.extend(block(rot_i, next, prev).map(|w| segments[i].label(w)));
        }
        out.set_rotation(cycle.node_at(pos), rot);
    }
    out
}

/// Glue per-component embeddings: every component contributes one
/// contiguous block to the rotation of each of its nodes.
pub(super) fn glue_components(size: usize, components: &[Component], parts: &[Embedding]) -> Embedding {
    let mut out = Embedding::new(size);
    for (component, part) in components.iter().zip(parts) {
        for local in 0..component.size() {
            for &w in part.ordered_neighbors(local) {
                out.push(component.label(local), component.label(w));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_wraps_around() {
        let rot = [4, 7, 1, 9, 2];
        assert_eq!(block(&rot, 9, 7).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(block(&rot, 4, 7).collect::<Vec<_>>(), Vec::<usize>::new());
        assert_eq!(block(&rot, 7, 4).collect::<Vec<_>>(), vec![1, 9, 2]);
    }

    #[test]
    fn around_cycle_square_with_chord() {
        let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
        let c = Cycle::from_nodes(4, vec![0, 1, 2, 3]);
        let emb = around_cycle(&g, &c);
        assert_eq!(emb.ordered_neighbors(0), &[3, 2, 1]);
        assert_eq!(emb.ordered_neighbors(2), &[1, 0, 3]);
        assert!(emb.is_planar_rotation());
        assert!(emb.matches_graph(&g));
    }

    #[test]
    fn glue_keeps_component_blocks_contiguous() {
        let a = Component::from_parent_ids(5, [0, 1, 2], [(0, 1), (1, 2), (2, 0)]);
        let b = Component::from_parent_ids(5, [2, 3, 4], [(2, 3), (3, 4), (4, 2)]);
        let parts = [adjacency_rotation(a.graph()), adjacency_rotation(b.graph())];
        let emb = glue_components(5, &[a, b], &parts);
        let rot = emb.ordered_neighbors(2);
        assert_eq!(rot.len(), 4);
        assert!(rot[..2].iter().all(|w| [0, 1].contains(w)));
        assert!(rot[2..].iter().all(|w| [3, 4].contains(w)));
        assert!(emb.is_planar_rotation());
    }
}
