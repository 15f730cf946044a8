use serde::{Deserialize, Serialize};

use super::defaults;

/// Centrality propagation parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralityConfig {
    /// Fixed number of propagation rounds.
    pub iterations: usize,
    /// Share of weight propagated along edges each round.
    pub damping: f64,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::DEFAULT_CENTRALITY_ITERATIONS,
            damping: defaults::DEFAULT_CENTRALITY_DAMPING,
        }
    }
}
