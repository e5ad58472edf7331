// src/config/model.rs

use serde::Deserialize;

use crate::types::SeedStrategy;

/// Worker count used when neither the CLI nor the config file sets one.
pub const DEFAULT_THREADS: usize = 4;

/// Configuration exactly as read from a TOML file, before validation.
///
/// ```toml
/// [pool]
/// threads = 8
///
/// [traversal]
/// seed = "roots"
/// roots = [0, 5]
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// Worker pool settings from `[pool]`.
    #[serde(default)]
    pub pool: PoolSection,

    /// Root seeding settings from `[traversal]`.
    #[serde(default)]
    pub traversal: TraversalSection,
}

/// `[pool]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolSection {
    /// Number of worker threads spawned once at startup.
    #[serde(default = "default_threads")]
    pub threads: usize,
}

fn default_threads() -> usize {
    DEFAULT_THREADS
}

impl Default for PoolSection {
    fn default() -> Self {
        Self {
            threads: default_threads(),
        }
    }
}

/// `[traversal]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraversalSection {
    /// `"all"` (default) or `"roots"`.
    #[serde(default)]
    pub seed: SeedStrategy,

    /// Explicit root node ids; only meaningful with `seed = "roots"`.
    #[serde(default)]
    pub roots: Vec<usize>,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`) or
/// [`ConfigFile::default`].
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub pool: PoolSection,
    pub traversal: TraversalSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(pool: PoolSection, traversal: TraversalSection) -> Self {
        Self { pool, traversal }
    }
}
