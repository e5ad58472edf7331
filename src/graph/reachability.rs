// src/graph/reachability.rs

//! Connectivity checks backed by `petgraph`.
//!
//! The termination detector only fires once every node has been processed,
//! so a root set that cannot reach some node would never finish. The driver
//! uses [`unreachable_from`] to reject such root sets up front.

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Dfs;

use super::model::Graph;
use super::NodeId;

fn to_petgraph(graph: &Graph) -> UnGraph<(), ()> {
    let mut g = UnGraph::<(), ()>::with_capacity(graph.node_count(), graph.edge_count());
    for _ in 0..graph.node_count() {
        g.add_node(());
    }

    // Each undirected edge appears in both endpoints' lists; keep one copy.
    for node in graph.nodes() {
        for &other in &node.neighbours {
            if node.id <= other {
                g.add_edge(NodeIndex::new(node.id), NodeIndex::new(other), ());
            }
        }
    }
    g
}

/// Node ids not reachable from any of `roots`, in ascending order.
///
/// Roots outside `0..node_count` are ignored; the caller validates them.
pub fn unreachable_from(graph: &Graph, roots: &[NodeId]) -> Vec<NodeId> {
    let g = to_petgraph(graph);
    let mut dfs = Dfs::empty(&g);

    for &root in roots.iter().filter(|&&r| r < graph.node_count()) {
        let start = NodeIndex::new(root);
        if dfs.discovered.contains(start.index()) {
            continue;
        }
        dfs.move_to(start);
        while dfs.next(&g).is_some() {}
    }

    (0..graph.node_count())
        .filter(|&id| !dfs.discovered.contains(id))
        .collect()
}

/// Number of connected components (isolated nodes count as one each).
pub fn component_count(graph: &Graph) -> usize {
    connected_components(&to_petgraph(graph))
}
