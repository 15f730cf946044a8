use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{HighRiskRegion, Hypothesis, RiskNarrative};
use crate::signal::Signal;

/// Direction of travel of the global risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendDirection {
    Escalating,
    #[default]
    Stable,
    /// Part of the output vocabulary; the aggregation path never emits it.
    DeEscalating,
}

impl TrendDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Escalating => "escalating",
            Self::Stable => "stable",
            Self::DeEscalating => "de-escalating",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compounding summary kept for output-shape compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MartingaleMetrics {
    /// 1 + narrative_count × 0.1
    pub accumulation_rate: f64,
    pub decay_factor: f64,
    /// Mirrors the global risk score.
    pub compounded_risk: f64,
}

/// Fixed-shape dimension matrix with its labels.
///
/// The values are a scaled random fill, not a statistical correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn dimension(&self) -> usize {
        self.labels.len()
    }
}

/// Final output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Ranked by severity × probability × (1 + centrality), descending.
    pub signals: Vec<Signal>,
    /// Ranked by aggregate risk, descending.
    pub narratives: Vec<RiskNarrative>,
    /// [0, 100]
    pub global_risk_score: f64,
    pub trend_direction: TrendDirection,
    pub hypothesis: Hypothesis,
    pub martingale_metrics: MartingaleMetrics,
    pub high_risk_regions: Vec<HighRiskRegion>,
    pub correlation_matrix: CorrelationMatrix,
    pub timestamp: DateTime<Utc>,
}

impl Analysis {
    /// Resolve a narrative's member ids to the signals they reference.
    pub fn narrative_members<'a>(
        &'a self,
        narrative: &'a RiskNarrative,
    ) -> impl Iterator<Item = &'a Signal> + 'a {
        narrative
            .signal_ids
            .iter()
            .filter_map(move |id| self.signals.iter().find(|s| &s.id == id))
    }

    /// The `n` highest-ranked signals.
    pub fn top_signals(&self, n: usize) -> &[Signal] {
        &self.signals[..n.min(self.signals.len())]
    }

    /// The highest-ranked narrative, if any.
    pub fn top_narrative(&self) -> Option<&RiskNarrative> {
        self.narratives.first()
    }

    /// Serialize to pretty JSON for the reporting layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
