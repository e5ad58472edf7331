// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod pool;
pub mod traversal;
pub mod types;

use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, ConfigFile};
use crate::errors::{GraphSumError, Result};
use crate::graph::reachability::component_count;
use crate::graph::{load_from_path, Graph};
use crate::traversal::{run_traversal, Seed, TraversalOptions, TraversalReport};
use crate::types::SeedStrategy;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - graph loading
/// - option resolution (CLI over config over defaults)
/// - the traversal itself
///
/// Returns `None` for `--dry-run`.
pub fn run(args: CliArgs) -> Result<Option<TraversalReport>> {
    let cfg = match &args.config {
        Some(path) => load_and_validate(path)?,
        None => ConfigFile::default(),
    };

    let options = resolve_options(&cfg, &args)?;
    debug!(?options, "resolved traversal options");

    let graph = load_from_path(&args.input)?;
    info!(
        input = %args.input.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    if args.dry_run {
        print_dry_run(&graph, &options);
        return Ok(None);
    }

    let report = run_traversal(Arc::new(graph), &options)?;
    Ok(Some(report))
}

/// Merge CLI flags over the validated config file.
///
/// `--root` always switches to an explicit root set, whatever the config
/// says.
pub fn resolve_options(cfg: &ConfigFile, args: &CliArgs) -> Result<TraversalOptions> {
    let threads = args.threads.unwrap_or(cfg.pool.threads);
    if threads == 0 {
        return Err(GraphSumError::ConfigError(
            "--threads must be >= 1 (got 0)".to_string(),
        ));
    }

    let seed = if !args.roots.is_empty() {
        Seed::Roots(args.roots.clone())
    } else {
        match cfg.traversal.seed {
            SeedStrategy::All => Seed::AllNodes,
            SeedStrategy::Roots => Seed::Roots(cfg.traversal.roots.clone()),
        }
    };

    Ok(TraversalOptions {
        threads,
        seed,
        task_hook: None,
    })
}

/// Simple dry-run output: graph shape and the options that would be used.
fn print_dry_run(graph: &Graph, options: &TraversalOptions) {
    println!("graphsum dry-run");
    println!("  threads = {}", options.threads);
    match &options.seed {
        Seed::AllNodes => println!("  seed = all nodes"),
        Seed::Roots(roots) => println!("  seed = roots {roots:?}"),
    }
    println!();

    println!("graph:");
    println!("  nodes: {}", graph.node_count());
    println!("  edges: {}", graph.edge_count());
    println!("  connected components: {}", component_count(graph));
    println!("  expected sum: {}", graph.total_value());

    debug!("dry-run complete (no traversal)");
}
