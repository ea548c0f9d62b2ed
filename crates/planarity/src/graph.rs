//! Undirected simple graph on dense node ids `0..size`.
//!
//! Adjacency lists keep insertion order; nothing in the crate relies on them
//! being sorted, but the cycle walk and the segment search visit neighbours
//! in this order, so results are deterministic for a given edge sequence.

use std::collections::VecDeque;

use crate::error::GraphError;

/// Adjacency-list graph. Edges are stored in both directions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    neighbors: Vec<Vec<usize>>,
}

impl Graph {
    /// Graph with `size` nodes and no edges.
    pub fn new(size: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); size],
        }
    }

    /// Build a graph from an edge list, validating every edge.
    pub fn from_edges<I>(size: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::new(size);
        for (u, v) in edges {
            g.try_add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Insert `u-v` in both directions.
    ///
    /// Pre: `u != v`, both in range, edge not yet present (checked in debug builds only).
    #[inline]
    pub fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u != v, "self-loop {u}");
        debug_assert!(!self.has_edge(u, v), "duplicate edge {u}-{v}");
        self.neighbors[u].push(v);
        self.neighbors[v].push(u);
    }

    /// Checked variant of [`Graph::add_edge`] for untrusted input.
    pub fn try_add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        let size = self.size();
        for node in [u, v] {
            if node >= size {
                return Err(GraphError::NodeOutOfRange { node, size });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge { u, v });
        }
        self.add_edge(u, v);
        Ok(())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        // scan the shorter list
        let (a, b) = if self.degree(u) <= self.degree(v) {
            (u, v)
        } else {
            (v, u)
        };
        self.neighbors[a].contains(&b)
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Every edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(u, ns)| {
            ns.iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// BFS 2-colouring. `None` if some connected component has an odd cycle.
    ///
    /// The first node of every BFS tree gets colour 0.
    pub fn two_coloring(&self) -> Option<Vec<u8>> {
        let n = self.size();
        let mut color: Vec<Option<u8>> = vec![None; n];
        let mut queue = VecDeque::new();
        for root in 0..n {
            if color[root].is_some() {
                continue;
            }
            color[root] = Some(0);
            queue.push_back(root);
            while let Some(v) = queue.pop_front() {
                let Some(cv) = color[v] else { continue };
                for &w in self.neighbors(v) {
                    match color[w] {
                        None => {
                            color[w] = Some(1 - cv);
                            queue.push_back(w);
                        }
                        Some(cw) if cw == cv => return None,
                        Some(_) => {}
                    }
                }
            }
        }
        color.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_is_symmetric() {
        let mut g = Graph::new(3);
        g.add_edge(0, 2);
        assert!(g.neighbors(0).contains(&2));
        assert!(g.neighbors(2).contains(&0));
        assert!(g.neighbors(1).is_empty());
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 2)]);
    }

    #[test]
    fn try_add_edge_rejects_bad_input() {
        let mut g = Graph::new(3);
        assert_eq!(
            g.try_add_edge(0, 3),
            Err(GraphError::NodeOutOfRange { node: 3, size: 3 })
        );
        assert_eq!(g.try_add_edge(1, 1), Err(GraphError::SelfLoop { node: 1 }));
        g.try_add_edge(0, 1).unwrap();
        assert_eq!(
            g.try_add_edge(1, 0),
            Err(GraphError::DuplicateEdge { u: 1, v: 0 })
        );
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn two_coloring_even_and_odd_cycles() {
        let square = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let colors = square.two_coloring().unwrap();
        assert_eq!(colors, vec![0, 1, 0, 1]);

        let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        assert!(triangle.two_coloring().is_none());

        // isolated nodes each start a fresh tree with colour 0
        let empty = Graph::new(3);
        assert_eq!(empty.two_coloring().unwrap(), vec![0, 0, 0]);
    }
}
