use std::str::FromStr;
use serde::Deserialize;

/// Which nodes the driver seeds as root tasks before the workers start.
///
/// - `All`: offer every node as a root; the visitation tracker suppresses
///   duplicates, so completion is detectable even for disconnected graphs
///   (default behaviour).
/// - `Roots`: seed only an explicit root set. Every node must be reachable
///   from it, otherwise the run is rejected before any thread is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedStrategy {
    All,
    Roots,
}

impl Default for SeedStrategy {
    fn default() -> Self {
        SeedStrategy::All
    }
}

impl FromStr for SeedStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(SeedStrategy::All),
            "roots" => Ok(SeedStrategy::Roots),
            other => Err(format!(
                "invalid seed strategy: {other} (expected \"all\" or \"roots\")"
            )),
        }
    }
}
