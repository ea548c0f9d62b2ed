//! Component and decomposition result types.

use std::collections::BTreeSet;

use crate::graph::Graph;

/// Empty slot of a relabelling scratch map.
pub(crate) const UNMAPPED: usize = usize::MAX;

/// Re-indexed induced subgraph of a parent graph.
///
/// `labels[local]` is the node id in the parent (the working graph for
/// biconnected components, the enclosing component for segments).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Component {
    graph: Graph,
    labels: Vec<usize>,
}

impl Component {
    pub fn new(graph: Graph, labels: Vec<usize>) -> Self {
        assert_eq!(graph.size(), labels.len(), "one label per node");
        Self { graph, labels }
    }

    /// Build from parent ids: local ids follow the order of `nodes`.
    ///
    /// `parent_size` bounds the ids in `nodes` and `edges`.
    pub fn from_parent_ids<N, E>(parent_size: usize, nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = usize>,
        E: IntoIterator<Item = (usize, usize)>,
    {
        Self::relabel(nodes, edges, &mut vec![UNMAPPED; parent_size])
    }

    /// As [`Component::from_parent_ids`], with a caller-owned scratch map.
    ///
    /// Pre: every entry of `local` is `UNMAPPED`. Only the entries of the new
    /// labels are touched, and they are reset before returning.
    pub(crate) fn relabel<N, E>(nodes: N, edges: E, local: &mut [usize]) -> Self
    where
        N: IntoIterator<Item = usize>,
        E: IntoIterator<Item = (usize, usize)>,
    {
        let labels: Vec<usize> = nodes.into_iter().collect();
        for (i, &v) in labels.iter().enumerate() {
            local[v] = i;
        }
        let mut graph = Graph::new(labels.len());
        for (u, v) in edges {
            assert!(
                local[u] != UNMAPPED && local[v] != UNMAPPED,
                "edge {u}-{v} leaves the component"
            );
            graph.add_edge(local[u], local[v]);
        }
        for &v in &labels {
            local[v] = UNMAPPED;
        }
        Self { graph, labels }
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.graph.size()
    }

    #[inline]
    pub fn label(&self, local: usize) -> usize {
        self.labels[local]
    }

    #[inline]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Move the graph out, leaving an empty one. Labels stay readable.
    pub(crate) fn take_graph(&mut self) -> Graph {
        std::mem::take(&mut self.graph)
    }
}

/// Cut vertices and biconnected components of one graph.
#[derive(Clone, Debug, Default)]
pub struct BiconnectedComponents {
    pub(super) cut_vertices: BTreeSet<usize>,
    pub(super) components: Vec<Component>,
}

impl BiconnectedComponents {
    #[inline]
    pub fn cut_vertices(&self) -> &BTreeSet<usize> {
        &self.cut_vertices
    }

    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }
}
