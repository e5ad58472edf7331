// src/config/mod.rs

//! Run configuration for graphsum.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like thread count and root rules (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigFile, PoolSection, RawConfigFile, TraversalSection, DEFAULT_THREADS};
