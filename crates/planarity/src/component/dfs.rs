//! Lowpoint sweep for biconnected components.
//!
//! One DFS assigns discovery ids and lowpoints. Every frame owns the nodes
//! and edges discovered below it that are not yet sealed into a component.
//! A finished child either seals its lists (plus the parent node) into a new
//! component or splices them onto the parent's lists in O(1).
//!
//! The DFS runs on an explicit frame stack; deep paths do not touch the
//! native call stack.

use std::collections::LinkedList;

use crate::graph::Graph;

use super::types::{BiconnectedComponents, Component, UNMAPPED};

const UNSEEN: usize = usize::MAX;

impl BiconnectedComponents {
    /// Decompose `graph` into biconnected components and cut vertices.
    ///
    /// Components appear in the order they are sealed (post-order of the
    /// DFS). Isolated nodes become one-node components.
    pub fn compute(graph: &Graph) -> Self {
        Sweep::new(graph).run()
    }
}

struct Frame {
    node: usize,
    cursor: usize,
    children: usize,
    nodes: LinkedList<usize>,
    edges: LinkedList<(usize, usize)>,
}

struct Sweep<'a> {
    g: &'a Graph,
    disc: Vec<usize>,
    low: Vec<usize>,
    parent: Vec<usize>,
    /// Relabelling scratch shared by every sealed component.
    local: Vec<usize>,
    next_id: usize,
    stack: Vec<Frame>,
    out: BiconnectedComponents,
}

impl<'a> Sweep<'a> {
    fn new(g: &'a Graph) -> Self {
        let n = g.size();
        Self {
            g,
            disc: vec![UNSEEN; n],
            low: vec![UNSEEN; n],
            parent: vec![UNSEEN; n],
            local: vec![UNMAPPED; n],
            next_id: 0,
            stack: Vec::new(),
            out: BiconnectedComponents::default(),
        }
    }

    fn run(mut self) -> BiconnectedComponents {
        for root in 0..self.g.size() {
            if self.disc[root] == UNSEEN {
                self.visit_tree(root);
            }
        }
        self.out
    }

    fn enter(&mut self, node: usize, nodes: LinkedList<usize>, edges: LinkedList<(usize, usize)>) {
        self.disc[node] = self.next_id;
        self.low[node] = self.next_id;
        self.next_id += 1;
        self.stack.push(Frame {
            node,
            cursor: 0,
            children: 0,
            nodes,
            edges,
        });
    }

    fn visit_tree(&mut self, root: usize) {
        self.enter(root, LinkedList::new(), LinkedList::new());
        while let Some(top) = self.stack.last_mut() {
            let v = top.node;
            if let Some(&w) = self.g.neighbors(v).get(top.cursor) {
                top.cursor += 1;
                if w == self.parent[v] {
                    continue;
                }
                if self.disc[w] == UNSEEN {
                    top.children += 1;
                    self.parent[w] = v;
                    self.enter(w, LinkedList::from([w]), LinkedList::from([(v, w)]));
                } else if self.disc[w] < self.disc[v] {
                    // back edge to an ancestor; the descendant side owns it
                    top.edges.push_back((v, w));
                    self.low[v] = self.low[v].min(self.disc[w]);
                }
                continue;
            }
            let Some(done) = self.stack.pop() else { break };
            self.finish(done);
        }
    }

    fn finish(&mut self, mut child: Frame) {
        let c = child.node;
        let Some(top) = self.stack.last_mut() else {
            // `c` is the DFS root
            assert!(
                child.nodes.is_empty() && child.edges.is_empty(),
                "root frame must end with empty pending lists"
            );
            match child.children {
                0 => self.out.components.push(Component::relabel(
                    [c],
                    std::iter::empty(),
                    &mut self.local,
                )),
                1 => {}
                _ => {
                    self.out.cut_vertices.insert(c);
                }
            }
            return;
        };
        let v = top.node;
        self.low[v] = self.low[v].min(self.low[c]);
        if self.low[c] >= self.disc[v] {
            child.nodes.push_back(v);
            let sealed = Component::relabel(child.nodes, child.edges, &mut self.local);
            self.out.components.push(sealed);
            if self.parent[v] != UNSEEN {
                self.out.cut_vertices.insert(v);
            }
        } else {
            top.nodes.append(&mut child.nodes);
            top.edges.append(&mut child.edges);
        }
    }
}
