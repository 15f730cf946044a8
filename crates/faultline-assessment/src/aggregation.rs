//! Global score, trend and the compounding summary.

use faultline_core::config::defaults;
use faultline_core::models::{MartingaleMetrics, RiskNarrative, TrendDirection};

/// Mean of `aggregate_risk × (1 + momentum)` over narratives, capped at 100.
/// Zero when there are no narratives.
pub fn global_risk_score(narratives: &[RiskNarrative]) -> f64 {
    if narratives.is_empty() {
        return 0.0;
    }
    let total: f64 = narratives
        .iter()
        .map(|n| n.aggregate_risk * (1.0 + n.momentum))
        .sum();
    (total / narratives.len() as f64).min(100.0)
}

/// Escalating above the escalation threshold, stable otherwise.
///
/// `TrendDirection::DeEscalating` has no trigger here; a single snapshot
/// carries no history to compare against.
pub fn trend_direction(global_risk_score: f64) -> TrendDirection {
    if global_risk_score > defaults::ESCALATION_THRESHOLD {
        TrendDirection::Escalating
    } else {
        TrendDirection::Stable
    }
}

pub fn martingale_metrics(narrative_count: usize, global_risk_score: f64) -> MartingaleMetrics {
    MartingaleMetrics {
        accumulation_rate: 1.0 + narrative_count as f64 * defaults::ACCUMULATION_STEP,
        decay_factor: defaults::REPORTED_DECAY_FACTOR,
        compounded_risk: global_risk_score,
    }
}
