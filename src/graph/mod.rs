// src/graph/mod.rs

//! The in-memory graph and everything needed to build it.
//!
//! - [`model`] holds the immutable node/adjacency representation.
//! - [`loader`] parses the textual input format into a [`Graph`].
//! - [`reachability`] answers connectivity questions (via `petgraph`) that the
//!   driver needs before it commits to a root set.

pub mod loader;
pub mod model;
pub mod reachability;

pub use loader::{load, load_from_path, LoadError};
pub use model::{Graph, Node};

/// Stable integer index of a node, `0..node_count`.
pub type NodeId = usize;
