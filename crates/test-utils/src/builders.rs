#![allow(dead_code)]

use std::fmt::Write;

use graphsum::graph::{Graph, NodeId};

/// Builder for `Graph` (and its textual input form) to simplify test setup.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    values: Vec<i64>,
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one node with `value`; ids are assigned in insertion order.
    pub fn node(mut self, value: i64) -> Self {
        self.values.push(value);
        self
    }

    pub fn nodes(mut self, values: &[i64]) -> Self {
        self.values.extend_from_slice(values);
        self
    }

    pub fn edge(mut self, a: NodeId, b: NodeId) -> Self {
        self.edges.push((a, b));
        self
    }

    /// Connect the existing nodes `0 - 1 - ... - n-1`.
    pub fn path(mut self) -> Self {
        for i in 1..self.values.len() {
            self.edges.push((i - 1, i));
        }
        self
    }

    /// Connect every existing node to node 0.
    pub fn star(mut self) -> Self {
        for i in 1..self.values.len() {
            self.edges.push((0, i));
        }
        self
    }

    /// Connect every pair of existing nodes.
    pub fn complete(mut self) -> Self {
        let n = self.values.len();
        for a in 0..n {
            for b in (a + 1)..n {
                self.edges.push((a, b));
            }
        }
        self
    }

    pub fn expected_sum(&self) -> i64 {
        self.values.iter().sum()
    }

    /// Render the graph in the `graphsum` input format.
    pub fn to_input_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.values.len(), self.edges.len());
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        let _ = writeln!(out, "{}", values.join(" "));
        for (a, b) in &self.edges {
            let _ = writeln!(out, "{a} {b}");
        }
        out
    }

    pub fn build(self) -> Graph {
        Graph::from_parts(self.values, &self.edges).expect("Failed to build valid graph from builder")
    }
}

/// The 4-node path `0-1-2-3` valued `{2, 3, 5, 7}`.
pub fn small_path() -> GraphBuilder {
    GraphBuilder::new().nodes(&[2, 3, 5, 7]).path()
}

/// Deterministic pseudo-random graph with `n` nodes and about `extra_edges`
/// edges on top of a spanning path, so it is always connected.
pub fn connected_graph(n: usize, extra_edges: usize, seed: u64) -> GraphBuilder {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };

    let values: Vec<i64> = (0..n).map(|_| (next() % 201) as i64 - 100).collect();
    let mut builder = GraphBuilder::new().nodes(&values).path();
    if n > 1 {
        for _ in 0..extra_edges {
            let a = (next() as usize) % n;
            let b = (next() as usize) % n;
            builder = builder.edge(a, b);
        }
    }
    builder
}
