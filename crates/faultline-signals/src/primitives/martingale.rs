//! Martingale risk accumulation over an ordered value series.
//!
//! Walks the series from most recent (last) to oldest with a running
//! multiplier starting at 1:
//!
//! ```text
//! score      += value × multiplier
//! multiplier ×= shock_multiplier   if value > shock_threshold
//! multiplier ×= decay
//! ```
//!
//! The final score is clamped to [0, 100].

use faultline_core::config::MartingaleConfig;

/// Accumulate with the default parameters (decay 0.95, shock > 50 ⇒ ×1.2).
pub fn martingale_risk(values: &[f64]) -> f64 {
    martingale_risk_with(values, &MartingaleConfig::default())
}

/// Accumulate with explicit parameters.
pub fn martingale_risk_with(values: &[f64], params: &MartingaleConfig) -> f64 {
    let mut score = 0.0;
    let mut multiplier = 1.0;

    for &value in values.iter().rev() {
        score += value * multiplier;
        if value > params.shock_threshold {
            multiplier *= params.shock_multiplier;
        }
        multiplier *= params.decay;
    }

    score.clamp(0.0, 100.0)
}
