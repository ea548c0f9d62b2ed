//! Rotation systems: the cyclic order of neighbours around every node.
//!
//! Faces are traced with the convention: after arriving at `v` from `u`,
//! leave along the neighbour that follows `u` in the rotation of `v`.

use std::collections::HashMap;

use crate::graph::Graph;

/// Ordered adjacency lists describing an embedding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Embedding {
    rotation: Vec<Vec<usize>>,
}

impl Embedding {
    /// Embedding with `size` nodes and empty rotations.
    pub fn new(size: usize) -> Self {
        Self {
            rotation: vec![Vec::new(); size],
        }
    }

    pub fn from_rotations(rotation: Vec<Vec<usize>>) -> Self {
        Self { rotation }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rotation.len()
    }

    #[inline]
    pub fn ordered_neighbors(&self, v: usize) -> &[usize] {
        &self.rotation[v]
    }

    /// Append `to` at the end of the rotation of `from` (one direction only).
    #[inline]
    pub fn push(&mut self, from: usize, to: usize) {
        self.rotation[from].push(to);
    }

    pub(crate) fn set_rotation(&mut self, v: usize, order: Vec<usize>) {
        self.rotation[v] = order;
    }

    pub fn edge_count(&self) -> usize {
        self.rotation.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Turn into the mirror-image embedding.
    pub fn mirror(&mut self) {
        self.rotation.iter_mut().for_each(|r| r.reverse());
    }

    pub fn into_rotations(self) -> Vec<Vec<usize>> {
        self.rotation
    }

    /// Every rotation is a permutation of the node's neighbours in `graph`.
    pub fn matches_graph(&self, graph: &Graph) -> bool {
        if self.size() != graph.size() {
            return false;
        }
        (0..self.size()).all(|v| {
            let mut a = self.rotation[v].clone();
            let mut b = graph.neighbors(v).to_vec();
            a.sort_unstable();
            b.sort_unstable();
            a == b
        })
    }

    /// Faces as closed node walks. `None` if some dart has no reverse dart.
    pub fn faces(&self) -> Option<Vec<Vec<usize>>> {
        let mut index: HashMap<(usize, usize), usize> = HashMap::new();
        for (v, rot) in self.rotation.iter().enumerate() {
            for (i, &w) in rot.iter().enumerate() {
                index.insert((v, w), i);
            }
        }
        let mut used: HashMap<(usize, usize), bool> = index.keys().map(|&d| (d, false)).collect();
        let mut faces = Vec::new();
        for (u, rot) in self.rotation.iter().enumerate() {
            for &v in rot {
                if used[&(u, v)] {
                    continue;
                }
                let mut face = Vec::new();
                let (mut a, mut b) = (u, v);
                while !used[&(a, b)] {
                    used.insert((a, b), true);
                    face.push(a);
                    let i = *index.get(&(b, a))?;
                    let rb = &self.rotation[b];
                    let c = rb[(i + 1) % rb.len()];
                    (a, b) = (b, c);
                }
                faces.push(face);
            }
        }
        Some(faces)
    }

    /// Connected components of the underlying graph (isolated nodes count).
    fn component_count(&self) -> usize {
        let n = self.size();
        let mut seen = vec![false; n];
        let mut count = 0;
        let mut stack = Vec::new();
        for root in 0..n {
            if seen[root] {
                continue;
            }
            count += 1;
            seen[root] = true;
            stack.push(root);
            while let Some(v) = stack.pop() {
                for &w in &self.rotation[v] {
                    if !seen[w] {
                        seen[w] = true;
                        stack.push(w);
                    }
                }
            }
        }
        count
    }

    /// Euler check: `V - E + F = 2` for every connected component.
    ///
    /// Isolated nodes have no darts and contribute their single face
    /// explicitly.
    pub fn is_planar_rotation(&self) -> bool {
        let Some(faces) = self.faces() else {
            return false;
        };
        let isolated = self.rotation.iter().filter(|r| r.is_empty()).count();
        let v = self.size() as i64;
        let e = self.edge_count() as i64;
        let f = (faces.len() + isolated) as i64;
        v - e + f == 2 * self.component_count() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_has_two_faces() {
        let emb = Embedding::from_rotations(vec![vec![1, 2], vec![2, 0], vec![0, 1]]);
        let faces = emb.faces().unwrap();
        assert_eq!(faces.len(), 2);
        assert!(faces.iter().all(|f| f.len() == 3));
        assert!(emb.is_planar_rotation());
    }

    #[test]
    fn square_with_chord_rotation() {
        let emb = Embedding::from_rotations(vec![
            vec![3, 2, 1],
            vec![0, 2],
            vec![1, 0, 3],
            vec![2, 0],
        ]);
        assert_eq!(emb.faces().unwrap().len(), 3);
        assert!(emb.is_planar_rotation());
        let mut m = emb.clone();
        m.mirror();
        assert!(m.is_planar_rotation());
    }

    #[test]
    fn k4_twisted_rotation_is_not_planar() {
        // identity-ordered rotations on K4 give a torus embedding
        let emb = Embedding::from_rotations(vec![
            vec![1, 2, 3],
            vec![0, 2, 3],
            vec![0, 1, 3],
            vec![0, 1, 2],
        ]);
        assert!(!emb.is_planar_rotation());
    }

    #[test]
    fn isolated_nodes_and_forests() {
        let emb = Embedding::from_rotations(vec![vec![], vec![2], vec![1], vec![]]);
        assert!(emb.is_planar_rotation());
        let g = Graph::from_edges(4, [(1, 2)]).unwrap();
        assert!(emb.matches_graph(&g));
    }

    #[test]
    fn one_sided_dart_is_rejected() {
        let emb = Embedding::from_rotations(vec![vec![1], vec![]]);
        assert!(emb.faces().is_none());
        assert!(!emb.is_planar_rotation());
    }
}
