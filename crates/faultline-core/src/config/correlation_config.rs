use serde::{Deserialize, Serialize};

/// Correlation matrix fill configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Seed for the matrix fill. `None` draws from OS entropy on every run.
    pub seed: Option<u64>,
}
