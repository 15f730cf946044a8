use serde::{Deserialize, Serialize};

use super::defaults;

/// Signal extraction configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Evaluate rules on the rayon pool. Output order is unaffected.
    pub parallel: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL_EXTRACTION,
        }
    }
}
