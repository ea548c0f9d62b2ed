//! Simple cycle inside a component, with O(1) position queries.
//!
//! Node ids are the ids of the graph the cycle was found in. The only
//! mutation besides `reverse` is `change_with_path`, which swaps one arc for
//! an alternate path (cycle repair).

use crate::graph::Graph;

/// Ordered simple cycle plus its inverse index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    nodes: Vec<usize>,
    position: Vec<Option<usize>>,
}

impl Cycle {
    /// Cycle through the given nodes in order; `graph_size` bounds the ids.
    pub fn from_nodes(graph_size: usize, nodes: Vec<usize>) -> Self {
        assert!(nodes.len() >= 3, "a simple cycle has at least 3 nodes");
        let mut c = Self {
            nodes,
            position: vec![None; graph_size],
        };
        c.reindex();
        c
    }

    /// Walk from node 0 along first unvisited neighbours until the walk is
    /// stuck, then close it at the earliest visited neighbour.
    ///
    /// Pre: every node has degree >= 2 (true for biconnected graphs with at
    /// least three nodes).
    pub fn find(graph: &Graph) -> Self {
        let n = graph.size();
        assert!(n >= 3, "cycle search needs at least 3 nodes");
        let mut on_walk: Vec<Option<usize>> = vec![None; n];
        let mut walk: Vec<usize> = vec![0];
        on_walk[0] = Some(0);
        loop {
            let cur = walk[walk.len() - 1];
            let parent = walk.len().checked_sub(2).map(|i| walk[i]);
            if let Some(&next) = graph.neighbors(cur).iter().find(|&&w| on_walk[w].is_none()) {
                on_walk[next] = Some(walk.len());
                walk.push(next);
                continue;
            }
            let start = graph
                .neighbors(cur)
                .iter()
                .filter(|&&w| Some(w) != parent)
                .filter_map(|&w| on_walk[w])
                .min();
            let Some(start) = start else {
                panic!("node {cur} has degree < 2; graph is not biconnected");
            };
            walk.drain(..start);
            return Self::from_nodes(n, walk);
        }
    }

    fn reindex(&mut self) {
        self.position.iter_mut().for_each(|p| *p = None);
        for (i, &v) in self.nodes.iter().enumerate() {
            assert!(self.position[v].is_none(), "node {v} repeats on the cycle");
            self.position[v] = Some(i);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    #[inline]
    pub fn node_at(&self, pos: usize) -> usize {
        self.nodes[pos]
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.position[v].is_some()
    }

    #[inline]
    pub fn position(&self, v: usize) -> Option<usize> {
        self.position[v]
    }

    fn expect_position(&self, v: usize) -> usize {
        match self.position[v] {
            Some(p) => p,
            None => panic!("node {v} is not on the cycle"),
        }
    }

    pub fn next(&self, v: usize) -> usize {
        let p = self.expect_position(v);
        self.nodes[(p + 1) % self.len()]
    }

    pub fn prev(&self, v: usize) -> usize {
        let p = self.expect_position(v);
        self.nodes[(p + self.len() - 1) % self.len()]
    }

    /// Flip the traversal direction.
    pub fn reverse(&mut self) {
        self.nodes.reverse();
        self.reindex();
    }

    /// Replace the arc between the path's endpoints with `path`.
    ///
    /// `path` starts and ends on the cycle; its interior is off the cycle.
    /// The kept arc runs from the path's end back to its start in traversal
    /// direction; when `include` is set and that arc misses it, the cycle is
    /// reversed and the other arc is used.
    pub fn change_with_path(&mut self, path: &[usize], include: Option<usize>) {
        assert!(path.len() >= 2, "path needs two endpoints");
        let (start, end) = (path[0], path[path.len() - 1]);
        assert!(
            self.contains(start) && self.contains(end) && start != end,
            "path endpoints must be distinct cycle nodes"
        );
        for _ in 0..2 {
            let mut arc = Vec::new();
            let mut pos = (self.expect_position(end) + 1) % self.len();
            while self.nodes[pos] != start {
                arc.push(self.nodes[pos]);
                pos = (pos + 1) % self.len();
            }
            if include.map_or(true, |x| arc.contains(&x)) {
                let mut nodes = path.to_vec();
                nodes.extend(arc);
                self.nodes = nodes;
                self.reindex();
                return;
            }
            self.reverse();
        }
        panic!("node {include:?} is on neither arc between {start} and {end}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4() -> Graph {
        Graph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap()
    }

    fn assert_simple_cycle(g: &Graph, c: &Cycle) {
        let mut seen = vec![false; g.size()];
        for (i, &v) in c.nodes().iter().enumerate() {
            assert!(!seen[v]);
            seen[v] = true;
            let w = c.nodes()[(i + 1) % c.len()];
            assert!(g.has_edge(v, w), "missing edge {v}-{w}");
        }
    }

    #[test]
    fn find_on_k4_and_square() {
        let g = k4();
        let c = Cycle::find(&g);
        assert!(c.len() >= 3);
        assert_simple_cycle(&g, &c);

        let sq = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let c = Cycle::find(&sq);
        assert_eq!(c.len(), 4);
        assert_simple_cycle(&sq, &c);
    }

    #[test]
    fn find_trims_the_walk_prefix() {
        // 0-1 is a tail; the loop is 1-2-3-4
        let mut g = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
        g.add_edge(0, 2);
        let c = Cycle::find(&g);
        assert_simple_cycle(&g, &c);
        assert!(c.len() >= 3);
    }

    #[test]
    fn prev_next_and_positions_wrap() {
        let c = Cycle::from_nodes(6, vec![5, 2, 4]);
        assert_eq!(c.next(4), 5);
        assert_eq!(c.prev(5), 4);
        assert_eq!(c.position(2), Some(1));
        assert_eq!(c.position(0), None);
        assert!(!c.contains(3));
    }

    #[test]
    fn change_with_path_keeps_required_node() {
        // hexagon 0..6 plus outside nodes 6, 7 forming a path 0-6-7-3
        let mut c = Cycle::from_nodes(8, vec![0, 1, 2, 3, 4, 5]);
        c.change_with_path(&[0, 6, 7, 3], Some(1));
        // arc 3 -> 0 in forward direction is 4,5 which misses 1, so the cycle flips
        assert!(c.contains(1) && c.contains(2));
        assert!(!c.contains(4) && !c.contains(5));
        assert_eq!(c.len(), 6);
        for v in [0, 6, 7, 3] {
            assert!(c.contains(v));
        }

        let mut d = Cycle::from_nodes(8, vec![0, 1, 2, 3, 4, 5]);
        d.change_with_path(&[0, 6, 7, 3], Some(5));
        assert_eq!(d.nodes(), &[0, 6, 7, 3, 4, 5]);
        assert_eq!(d.next(5), 0);

        let mut e = Cycle::from_nodes(8, vec![0, 1, 2, 3, 4, 5]);
        e.change_with_path(&[2, 6, 4], None);
        assert_eq!(e.nodes(), &[2, 6, 4, 5, 0, 1]);
        assert_eq!(e.position(3), None);
    }
}
