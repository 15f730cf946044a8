use serde::{Deserialize, Serialize};

use super::defaults;

/// Martingale risk accumulation parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MartingaleConfig {
    /// Per-step multiplier discount applied to older values.
    pub decay: f64,
    /// Values strictly above this compound the multiplier.
    pub shock_threshold: f64,
    /// Compounding factor applied on a shock.
    pub shock_multiplier: f64,
}

impl Default for MartingaleConfig {
    fn default() -> Self {
        Self {
            decay: defaults::DEFAULT_MARTINGALE_DECAY,
            shock_threshold: defaults::DEFAULT_SHOCK_THRESHOLD,
            shock_multiplier: defaults::DEFAULT_SHOCK_MULTIPLIER,
        }
    }
}
