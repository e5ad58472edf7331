// src/graph/model.rs

use super::loader::LoadError;
use super::NodeId;

/// A single graph node: its value and undirected neighbour links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub value: i64,
    pub neighbours: Vec<NodeId>,
}

/// Immutable adjacency-list graph.
///
/// Built once by the loader and then shared read-only by every worker for
/// the duration of a traversal. Per-node visitation state lives outside the
/// graph (see `traversal::VisitationTracker`), so a `Graph` is plain `Sync`
/// data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from node values and undirected edges.
    ///
    /// Edge endpoints must be valid node ids; a self-loop is recorded once.
    pub fn from_parts(values: Vec<i64>, edges: &[(NodeId, NodeId)]) -> Result<Self, LoadError> {
        let count = values.len();
        for (edge, &(a, b)) in edges.iter().enumerate() {
            for node in [a, b] {
                if node >= count {
                    return Err(LoadError::EdgeOutOfRange { edge, node, count });
                }
            }
        }
        Ok(Self::from_checked_parts(values, edges.iter().copied()))
    }

    /// Assumes every endpoint is `< values.len()`.
    pub(crate) fn from_checked_parts(
        values: Vec<i64>,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> Self {
        let mut nodes: Vec<Node> = values
            .into_iter()
            .enumerate()
            .map(|(id, value)| Node {
                id,
                value,
                neighbours: Vec::new(),
            })
            .collect();

        let mut edge_count = 0;
        for (a, b) in edges {
            nodes[a].neighbours.push(b);
            if a != b {
                nodes[b].neighbours.push(a);
            }
            edge_count += 1;
        }

        Self { nodes, edge_count }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Neighbours of `id`; empty for an unknown id.
    pub fn neighbours(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.neighbours.as_slice())
            .unwrap_or(&[])
    }

    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.nodes.get(id).map(|n| n.value)
    }

    /// Sequential sum of every node value.
    ///
    /// Used for dry-run summaries and as the reference answer in tests.
    pub fn total_value(&self) -> i64 {
        self.nodes
            .iter()
            .fold(0i64, |acc, n| acc.wrapping_add(n.value))
    }
}
