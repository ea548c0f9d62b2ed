use super::*;
use crate::cycle::Cycle;
use crate::error::EmbedError;
use crate::generate::{self, RandomGraphCfg, ReplayToken};
use crate::segment::Segment;
use proptest::prelude::*;

fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
    Graph::from_edges(n, edges.iter().copied()).unwrap()
}

/// The graph as its own component, keeping ids and neighbour order.
fn whole(g: &Graph) -> Component {
    Component::new(g.clone(), (0..g.size()).collect())
}

fn verifying() -> Embedder {
    Embedder::with_observer(
        EmbedCfg {
            verify_rotations: true,
        },
        NoopObserver,
    )
}

fn assert_valid(g: &Graph, e: &Embedding) {
    assert_eq!(e.size(), g.size());
    for v in 0..g.size() {
        assert_eq!(e.ordered_neighbors(v).len(), g.degree(v), "degree of node {v}");
    }
    assert!(e.matches_graph(g));
    assert!(e.is_planar_rotation());
}

#[derive(Default)]
struct Recorder {
    components: usize,
    cycles: Vec<usize>,
    segment_counts: Vec<(usize, usize)>,
    repairs: Vec<usize>,
    rejections: usize,
}

impl EmbedObserver for Recorder {
    fn component_found(&mut self, _index: usize, _component: &Component) {
        self.components += 1;
    }
    fn cycle_found(&mut self, depth: usize, _cycle: &Cycle) {
        self.cycles.push(depth);
    }
    fn segments_found(&mut self, depth: usize, segments: &[Segment]) {
        self.segment_counts.push((depth, segments.len()));
    }
    fn cycle_repaired(&mut self, depth: usize, _cycle: &Cycle) {
        self.repairs.push(depth);
    }
    fn not_planar(&mut self, _depth: usize, _segments: &[Segment]) {
        self.rejections += 1;
    }
}

#[test]
fn k4_embeds() {
    let g = generate::complete(4);
    let e = verifying().embed(&g).unwrap();
    assert_valid(&g, &e);
    assert_eq!(e.faces().unwrap().len(), 4);
}

#[test]
fn k5_and_k33_are_rejected() {
    let mut rec = Recorder::default();
    let mut embedder = Embedder::with_observer(EmbedCfg::default(), &mut rec);
    assert_eq!(embedder.embed(&generate::complete(5)), Err(EmbedError::NotPlanar));
    assert_eq!(
        embedder.embed(&generate::complete_bipartite(3, 3)),
        Err(EmbedError::NotPlanar)
    );
    assert_eq!(rec.rejections, 2);
}

#[test]
fn petersen_is_rejected() {
    assert!(!is_planar(&generate::petersen()));
}

#[test]
fn tiny_graphs_use_adjacency() {
    let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
    let e = embed(&g).unwrap();
    assert_valid(&g, &e);
    let empty = Graph::new(0);
    assert_eq!(embed(&empty).unwrap().size(), 0);
}

#[test]
fn square_with_chord_keeps_degrees() {
    let g = graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
    let e = verifying().embed(&g).unwrap();
    assert_valid(&g, &e);
}

#[test]
fn theta_graph_embeds_through_path_case() {
    let g = graph(5, &[(0, 2), (2, 1), (0, 3), (3, 1), (0, 4), (4, 1)]);
    let mut rec = Recorder::default();
    let e = Embedder::with_observer(EmbedCfg::default(), &mut rec)
        .embed(&g)
        .unwrap();
    assert_valid(&g, &e);
    assert_eq!(rec.segment_counts, vec![(0, 1)]);
    assert!(rec.repairs.is_empty());
}

#[test]
fn hexagon_with_parallel_chords_splits_in_two() {
    let g = graph(
        6,
        &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 2), (3, 5)],
    );
    let mut rec = Recorder::default();
    let e = Embedder::with_observer(EmbedCfg::default(), &mut rec)
        .embed_component(&whole(&g))
        .unwrap();
    assert_valid(&g, &e);
    assert_eq!(rec.segment_counts[0], (0, 2));
    // each chord segment recurses once
    assert_eq!(rec.cycles.iter().filter(|&&d| d == 1).count(), 2);
}

#[test]
fn single_branching_segment_triggers_one_repair() {
    // hub 0 on the hexagon 1..=6, joined to 1, 4 and 5
    let g = graph(
        7,
        &[
            (0, 1),
            (0, 4),
            (0, 5),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 1),
        ],
    );
    let mut rec = Recorder::default();
    let e = Embedder::with_observer(
        EmbedCfg {
            verify_rotations: true,
        },
        &mut rec,
    )
    .embed_component(&whole(&g))
    .unwrap();
    assert_valid(&g, &e);
    assert_eq!(rec.repairs, vec![0]);
    assert_eq!(rec.segment_counts[0], (0, 1));
    assert!(rec.segment_counts[1].1 >= 2);
}

#[test]
fn bowtie_cut_vertex_has_contiguous_blocks() {
    let g = graph(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
    let mut rec = Recorder::default();
    let e = Embedder::with_observer(EmbedCfg::default(), &mut rec)
        .embed(&g)
        .unwrap();
    assert_valid(&g, &e);
    assert_eq!(rec.components, 2);
    let rot = e.ordered_neighbors(2);
    assert_eq!(rot.len(), 4);
    let i = rot.iter().position(|&w| w == 0).unwrap();
    let j = rot.iter().position(|&w| w == 1).unwrap();
    assert!((i + 4 - j) % 4 == 1 || (j + 4 - i) % 4 == 1, "{rot:?}");
}

#[test]
fn non_planar_block_behind_cut_vertex_fails() {
    // K5 on 0..5 plus a pendant triangle at node 4
    let k5 = generate::complete(5);
    let pendant = [(4, 5), (5, 6), (6, 4)];
    let g = Graph::from_edges(7, k5.edges().chain(pendant)).unwrap();
    assert_eq!(embed(&g), Err(EmbedError::NotPlanar));
}

#[test]
fn forests_and_isolated_nodes_embed() {
    let g = graph(7, &[(0, 1), (1, 2), (1, 3), (5, 6)]);
    let e = verifying().embed(&g).unwrap();
    assert_valid(&g, &e);
}

#[test]
fn grids_and_wheels_embed() {
    for g in [
        generate::grid(4, 5),
        generate::grid(7, 7),
        generate::wheel(3),
        generate::wheel(9),
        generate::cycle(12),
    ] {
        let e = verifying().embed(&g).unwrap();
        assert_valid(&g, &e);
    }
}

#[test]
fn long_cycle_does_not_recurse() {
    let g = generate::cycle(200_000);
    let e = embed(&g).unwrap();
    assert_eq!(e.edge_count(), 200_000);
}

#[test]
fn ladder_embeds() {
    let g = generate::grid(2, 150);
    let e = embed(&g).unwrap();
    assert_valid(&g, &e);
}

#[test]
fn planar_results_respect_edge_bound() {
    for index in 0..40 {
        let cfg = RandomGraphCfg {
            nodes: 12,
            edges: 22,
        };
        let g = generate::random_gnm(cfg, ReplayToken::new(5, index));
        if let Ok(e) = embed(&g) {
            assert!(g.edge_count() <= 3 * g.size() - 6);
            assert_valid(&g, &e);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn stacked_triangulations_embed(nodes in 4usize..60, seed in any::<u64>()) {
        let cfg = RandomGraphCfg { nodes, ..Default::default() };
        let g = generate::random_stacked_triangulation(cfg, ReplayToken::new(seed, 0));
        let e = verifying().embed(&g).unwrap();
        assert_valid(&g, &e);
        // Euler on a triangulation: 2n - 4 triangles
        prop_assert_eq!(e.faces().unwrap().len(), 2 * nodes - 4);
    }

    #[test]
    fn one_more_edge_breaks_a_triangulation(nodes in 5usize..40, seed in any::<u64>(), pick in any::<prop::sample::Index>()) {
        let cfg = RandomGraphCfg { nodes, ..Default::default() };
        let mut g = generate::random_stacked_triangulation(cfg, ReplayToken::new(seed, 1));
        let missing: Vec<(usize, usize)> = (0..nodes)
            .flat_map(|u| (u + 1..nodes).map(move |v| (u, v)))
            .filter(|&(u, v)| !g.has_edge(u, v))
            .collect();
        let (u, v) = missing[pick.index(missing.len())];
        g.add_edge(u, v);
        prop_assert_eq!(embed(&g), Err(EmbedError::NotPlanar));
    }

    #[test]
    fn random_graphs_give_valid_rotations_or_reject(nodes in 4usize..24, extra in 0usize..30, seed in any::<u64>()) {
        let cfg = RandomGraphCfg { nodes, edges: nodes + extra };
        let g = generate::random_gnm(cfg, ReplayToken::new(seed, 2));
        match verifying().embed(&g) {
            Ok(e) => assert_valid(&g, &e),
            Err(EmbedError::NotPlanar) => prop_assert!(g.edge_count() >= 9),
        }
    }
}
