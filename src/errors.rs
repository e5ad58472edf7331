// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::graph::{LoadError, NodeId};

#[derive(Error, Debug)]
pub enum GraphSumError {
    #[error("Graph load error: {0}")]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Root node {root} is out of range (graph has {count} nodes)")]
    InvalidRoot { root: NodeId, count: usize },

    #[error("{count} node(s) are unreachable from the seeded roots (e.g. {sample:?})")]
    UnreachableNodes { count: usize, sample: Vec<NodeId> },

    #[error("Failed to spawn worker thread {index}: {source}")]
    ThreadSpawn {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker thread {worker} panicked")]
    WorkerPanicked { worker: String },

    #[error("Traversal stalled: {processed} of {total} nodes processed and no work left")]
    Stalled { processed: usize, total: usize },

    #[error("Traversal aborted: {0}")]
    Aborted(String),

    #[error("Traversal invariant violated: {0}")]
    Invariant(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GraphSumError>;
