// src/graph/loader.rs

//! Parser for the textual graph format.
//!
//! ```text
//! # comment lines start with '#'
//! 4 3          <- node count N, edge count M
//! 2 3 5 7      <- N node values
//! 0 1          <- M undirected edges
//! 1 2
//! 2 3
//! ```
//!
//! Tokens are whitespace-separated; line breaks only matter for comments and
//! error positions.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;
use tracing::debug;

use super::model::Graph;
use super::NodeId;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read graph input: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input: expected {expected}")]
    MissingToken { expected: &'static str },

    #[error("line {line}: invalid token '{token}', expected {expected}")]
    InvalidToken {
        line: usize,
        token: String,
        expected: &'static str,
    },

    #[error("line {line}: node {node} out of range (graph has {count} nodes)")]
    NodeOutOfRange {
        line: usize,
        node: NodeId,
        count: usize,
    },

    #[error("edge #{edge}: node {node} out of range (graph has {count} nodes)")]
    EdgeOutOfRange {
        edge: usize,
        node: NodeId,
        count: usize,
    },

    #[error("line {line}: unexpected trailing token '{token}'")]
    TrailingData { line: usize, token: String },
}

/// Parse a graph from any reader.
pub fn load(mut source: impl Read) -> Result<Graph, LoadError> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;
    parse(&text)
}

/// Open and parse a graph file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = load(file)?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

fn parse(text: &str) -> Result<Graph, LoadError> {
    let mut tokens = Tokens::new(text);

    let (_, node_count) = tokens.expect::<usize>("node count")?;
    let (_, edge_count) = tokens.expect::<usize>("edge count")?;

    // Capacities are capped so a bogus header can't force a huge allocation.
    let mut values = Vec::with_capacity(node_count.min(1 << 20));
    for _ in 0..node_count {
        let (_, value) = tokens.expect::<i64>("node value")?;
        values.push(value);
    }

    let mut edges = Vec::with_capacity(edge_count.min(1 << 16));
    for _ in 0..edge_count {
        let (line, a) = tokens.expect::<NodeId>("edge endpoint")?;
        let (_, b) = tokens.expect::<NodeId>("edge endpoint")?;
        for node in [a, b] {
            if node >= node_count {
                return Err(LoadError::NodeOutOfRange {
                    line,
                    node,
                    count: node_count,
                });
            }
        }
        edges.push((a, b));
    }

    if let Some((line, token)) = tokens.next_token() {
        return Err(LoadError::TrailingData {
            line,
            token: token.to_string(),
        });
    }

    Ok(Graph::from_checked_parts(values, edges))
}

/// Whitespace tokenizer that remembers 1-based line numbers.
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<(usize, SplitWhitespace<'a>)>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            current: None,
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        loop {
            if let Some((line, words)) = self.current.as_mut() {
                if let Some(token) = words.next() {
                    return Some((*line, token));
                }
            }

            let (idx, text) = self.lines.next()?;
            if text.trim_start().starts_with('#') {
                self.current = None;
                continue;
            }
            self.current = Some((idx + 1, text.split_whitespace()));
        }
    }

    fn expect<T: FromStr>(&mut self, expected: &'static str) -> Result<(usize, T), LoadError> {
        let (line, token) = self
            .next_token()
            .ok_or(LoadError::MissingToken { expected })?;

        token
            .parse::<T>()
            .map(|value| (line, value))
            .map_err(|_| LoadError::InvalidToken {
                line,
                token: token.to_string(),
                expected,
            })
    }
}
