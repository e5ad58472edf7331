// tests/graph_loading.rs

mod common;
use crate::common::builders::{small_path, GraphBuilder};
use crate::common::temp_file;

use std::error::Error;

use graphsum::graph::reachability::{component_count, unreachable_from};
use graphsum::graph::{load, load_from_path, Graph, LoadError};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn parses_values_and_undirected_edges() -> TestResult {
    let graph = load("4 3\n2 3 5 7\n0 1\n1 2\n2 3\n".as_bytes())?;

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.value(2), Some(5));
    assert_eq!(graph.neighbours(0), &[1]);
    assert_eq!(graph.neighbours(1), &[0, 2]);
    assert_eq!(graph.neighbours(3), &[2]);
    assert_eq!(graph.total_value(), 17);
    Ok(())
}

#[test]
fn comments_and_free_layout_are_accepted() -> TestResult {
    let text = "# a triangle\n3 3 10\n  -4 6\n# edges\n0 1 1 2\n2 0\n";
    let graph = load(text.as_bytes())?;

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.total_value(), 12);
    assert_eq!(graph.neighbours(2), &[1, 0]);
    Ok(())
}

#[test]
fn self_loop_is_recorded_once() -> TestResult {
    let graph = load("1 1\n42\n0 0\n".as_bytes())?;
    assert_eq!(graph.neighbours(0), &[0]);
    Ok(())
}

#[test]
fn builder_text_round_trips_through_loader() -> TestResult {
    let builder = small_path();
    let graph = load(builder.to_input_text().as_bytes())?;
    assert_eq!(graph, builder.build());
    Ok(())
}

#[test]
fn empty_graph_is_valid() -> TestResult {
    let graph = load("0 0\n".as_bytes())?;
    assert!(graph.is_empty());
    assert_eq!(graph.total_value(), 0);
    Ok(())
}

#[test]
fn missing_header_is_reported() {
    match load("".as_bytes()) {
        Err(LoadError::MissingToken { expected }) => assert_eq!(expected, "node count"),
        other => panic!("Expected MissingToken, got: {:?}", other),
    }
}

#[test]
fn truncated_values_are_reported() {
    match load("3 0\n1 2\n".as_bytes()) {
        Err(LoadError::MissingToken { expected }) => assert_eq!(expected, "node value"),
        other => panic!("Expected MissingToken, got: {:?}", other),
    }
}

#[test]
fn invalid_token_reports_line() {
    match load("2 1\n1 x\n0 1\n".as_bytes()) {
        Err(LoadError::InvalidToken { line, token, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(token, "x");
        }
        other => panic!("Expected InvalidToken, got: {:?}", other),
    }
}

#[test]
fn negative_node_count_is_invalid() {
    assert!(matches!(
        load("-1 0\n".as_bytes()),
        Err(LoadError::InvalidToken { line: 1, .. })
    ));
}

#[test]
fn edge_out_of_range_reports_line() {
    match load("2 2\n1 1\n0 1\n1 2\n".as_bytes()) {
        Err(LoadError::NodeOutOfRange { line, node, count }) => {
            assert_eq!(line, 4);
            assert_eq!(node, 2);
            assert_eq!(count, 2);
        }
        other => panic!("Expected NodeOutOfRange, got: {:?}", other),
    }
}

#[test]
fn trailing_tokens_are_rejected() {
    match load("1 0\n5\n7\n".as_bytes()) {
        Err(LoadError::TrailingData { line, token }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "7");
        }
        other => panic!("Expected TrailingData, got: {:?}", other),
    }
}

#[test]
fn from_parts_validates_endpoints() {
    match Graph::from_parts(vec![1, 2], &[(0, 1), (1, 5)]) {
        Err(LoadError::EdgeOutOfRange { edge, node, count }) => {
            assert_eq!((edge, node, count), (1, 5, 2));
        }
        other => panic!("Expected EdgeOutOfRange, got: {:?}", other),
    }
}

#[test]
fn load_from_path_reads_file() -> TestResult {
    let file = temp_file(&small_path().to_input_text());
    let graph = load_from_path(file.path())?;
    assert_eq!(graph.total_value(), 17);
    Ok(())
}

#[test]
fn load_from_missing_path_is_io_error() {
    let result = load_from_path("/definitely/not/a/graph.txt");
    assert!(matches!(result, Err(LoadError::Io(_))));
}

#[test]
fn reachability_finds_isolated_nodes() {
    // 0-1-2 plus isolated 3 and a separate 4-5 pair.
    let graph = GraphBuilder::new()
        .nodes(&[1, 1, 1, 1, 1, 1])
        .edge(0, 1)
        .edge(1, 2)
        .edge(4, 5)
        .build();

    assert_eq!(unreachable_from(&graph, &[0]), vec![3, 4, 5]);
    assert_eq!(unreachable_from(&graph, &[2, 5]), vec![3]);
    assert!(unreachable_from(&graph, &[0, 3, 4]).is_empty());
    assert_eq!(component_count(&graph), 3);
}
