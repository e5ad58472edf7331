// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{GraphSumError, Result};
use crate::types::SeedStrategy;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = GraphSumError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.pool, raw.traversal))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_pool(cfg)?;
    validate_traversal(cfg)?;
    Ok(())
}

fn validate_pool(cfg: &RawConfigFile) -> Result<()> {
    if cfg.pool.threads == 0 {
        return Err(GraphSumError::ConfigError(
            "[pool].threads must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_traversal(cfg: &RawConfigFile) -> Result<()> {
    match (cfg.traversal.seed, cfg.traversal.roots.is_empty()) {
        (SeedStrategy::Roots, true) => Err(GraphSumError::ConfigError(
            "[traversal].roots must list at least one node when seed = \"roots\"".to_string(),
        )),
        (SeedStrategy::All, false) => Err(GraphSumError::ConfigError(
            "[traversal].roots is only allowed with seed = \"roots\"".to_string(),
        )),
        _ => Ok(()),
    }
}
