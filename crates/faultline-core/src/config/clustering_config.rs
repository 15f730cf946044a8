use serde::{Deserialize, Serialize};

use super::defaults;

/// How signals are grouped into narratives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusteringStrategy {
    /// Single greedy pass anchored on extraction order. Order-dependent.
    #[default]
    Greedy,
    /// Connected components over the same adjacency predicate.
    UnionFind,
}

/// Narrative clustering configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    pub strategy: ClusteringStrategy,
    /// Signals closer than this (seconds) are temporally linked.
    pub temporal_window_secs: i64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            strategy: ClusteringStrategy::default(),
            temporal_window_secs: defaults::DEFAULT_TEMPORAL_WINDOW_SECS,
        }
    }
}
