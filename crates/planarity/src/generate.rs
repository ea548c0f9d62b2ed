//! Graph families and seeded random graphs.
//!
//! Purpose
//! - Deterministic inputs for tests, benches and the CLI `generate` command.
//!
//! Model
//! - Named families (`complete`, `grid`, `petersen`, ...) are fixed layouts.
//! - Random draws use a replay token `(seed, index)` mixed into one RNG, so a
//!   draw can be reproduced from its token alone.
//! - `random_stacked_triangulation` is planar by construction (repeatedly
//!   stacks a node into a face of a triangulation); `random_gnm` is not.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Size of a random draw.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphCfg {
    pub nodes: usize,
    /// Edge count for `random_gnm`. Clamped to `nodes * (nodes - 1) / 2`.
    pub edges: usize,
}

impl Default for RandomGraphCfg {
    fn default() -> Self {
        Self {
            nodes: 32,
            edges: 64,
        }
    }
}

pub fn complete(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for u in 0..n {
        for v in u + 1..n {
            g.add_edge(u, v);
        }
    }
    g
}

/// `K_{a,b}`: nodes `0..a` on one side, `a..a+b` on the other.
pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    let mut g = Graph::new(a + b);
    for u in 0..a {
        for v in a..a + b {
            g.add_edge(u, v);
        }
    }
    g
}

/// Simple cycle `0 - 1 - ... - (n-1) - 0`; needs `n >= 3`.
pub fn cycle(n: usize) -> Graph {
    assert!(n >= 3, "a simple cycle needs at least 3 nodes, got {n}");
    let mut g = Graph::new(n);
    for v in 0..n {
        g.add_edge(v, (v + 1) % n);
    }
    g
}

/// Hub `0` joined to every node of the rim cycle `1..=rim`.
pub fn wheel(rim: usize) -> Graph {
    assert!(rim >= 3, "a wheel needs a rim of at least 3 nodes, got {rim}");
    let mut g = Graph::new(rim + 1);
    for i in 0..rim {
        g.add_edge(0, i + 1);
        g.add_edge(i + 1, (i + 1) % rim + 1);
    }
    g
}

/// `rows x cols` grid; node `(r, c)` has id `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut g = Graph::new(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                g.add_edge(v, v + 1);
            }
            if r + 1 < rows {
                g.add_edge(v, v + cols);
            }
        }
    }
    g
}

/// Outer 5-cycle `0..5`, inner pentagram `5..10`, spokes `i - i+5`.
pub fn petersen() -> Graph {
    let mut g = Graph::new(10);
    for i in 0..5 {
        g.add_edge(i, (i + 1) % 5);
        g.add_edge(5 + i, 5 + (i + 2) % 5);
        g.add_edge(i, i + 5);
    }
    g
}

/// Random maximal planar graph with `max(cfg.nodes, 3)` nodes and
/// `3n - 6` edges (3 edges for the seed triangle).
pub fn random_stacked_triangulation(cfg: RandomGraphCfg, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let n = cfg.nodes.max(3);
    let mut g = Graph::new(n);
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 0);
    // both sides of the seed triangle are faces
    let mut faces = vec![[0, 1, 2], [0, 2, 1]];
    for v in 3..n {
        let i = rng.gen_range(0..faces.len());
        let [a, b, c] = faces.swap_remove(i);
        g.add_edge(v, a);
        g.add_edge(v, b);
        g.add_edge(v, c);
        faces.extend([[a, b, v], [b, c, v], [c, a, v]]);
    }
    g
}

/// Uniform simple graph with `cfg.nodes` nodes and `cfg.edges` distinct edges.
pub fn random_gnm(cfg: RandomGraphCfg, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let n = cfg.nodes;
    let max_edges = n * n.saturating_sub(1) / 2;
    let m = cfg.edges.min(max_edges);
    let mut picked = BTreeSet::new();
    while picked.len() < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            picked.insert((u.min(v), u.max(v)));
        }
    }
    let mut g = Graph::new(n);
    for (u, v) in picked {
        g.add_edge(u, v);
    }
    g
}

/// Serialise in the loader's text format.
pub fn to_edge_list_text(graph: &Graph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", graph.size());
    for (u, v) in graph.edges() {
        let _ = writeln!(out, "{u} {v}");
    }
    out
}
