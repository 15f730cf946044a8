use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk dimension a signal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    Geopolitical,
    Economic,
    Environmental,
    Cyber,
    Social,
    Military,
    Infrastructure,
    Narrative,
}

impl SignalType {
    pub const ALL: [SignalType; 8] = [
        Self::Geopolitical,
        Self::Economic,
        Self::Environmental,
        Self::Cyber,
        Self::Social,
        Self::Military,
        Self::Infrastructure,
        Self::Narrative,
    ];

    /// Wire name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Geopolitical => "geopolitical",
            Self::Economic => "economic",
            Self::Environmental => "environmental",
            Self::Cyber => "cyber",
            Self::Social => "social",
            Self::Military => "military",
            Self::Infrastructure => "infrastructure",
            Self::Narrative => "narrative",
        }
    }

    /// Human-readable label used in titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Geopolitical => "Geopolitical",
            Self::Economic => "Economic",
            Self::Environmental => "Environmental",
            Self::Cyber => "Cyber",
            Self::Social => "Social",
            Self::Military => "Military",
            Self::Infrastructure => "Infrastructure",
            Self::Narrative => "Narrative",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named point on the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            name: name.into(),
        }
    }
}

/// Rule-specific values that explain why a signal fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleIndicators {
    MilitaryConvergence {
        vessel_count: usize,
        flight_count: usize,
        mil_activity: f64,
        prediction_stress: usize,
        likelihood: f64,
    },
    MarketFracture {
        market_change: f64,
        sector_divergence: usize,
        economic_risk: f64,
    },
    CommodityShock {
        oil_change: Option<f64>,
        gold_change: Option<f64>,
        crypto_vol_count: usize,
    },
    SocialUnrest {
        event_count: usize,
        total_fatalities: u64,
        martingale_score: f64,
    },
    Environmental {
        max_magnitude: f64,
        weather_alert_count: usize,
    },
    Infrastructure {
        severe_outage_count: usize,
    },
    AlertDensity {
        total_alerts: u64,
        category_count: usize,
    },
    /// Free-form values from rules registered outside this workspace.
    Custom { values: BTreeMap<String, f64> },
}

/// One detected risk indicator.
///
/// Created once per rule firing. Only `cluster_id` (set by clustering) and
/// `centrality` (set by the centrality engine) change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: String,
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    /// [0, 100]
    pub severity: f64,
    /// [0, 1]
    pub probability: f64,
    /// [0, 100]
    pub impact: f64,
    /// [0, 1]. `None` until centrality runs.
    pub centrality: Option<f64>,
    pub description: String,
    pub location: Option<GeoPoint>,
    pub correlations: Vec<SignalType>,
    /// `None` until clustering runs.
    pub cluster_id: Option<String>,
    pub indicators: RuleIndicators,
    pub timestamp: DateTime<Utc>,
}

impl Signal {
    /// Create a signal. Severity and impact are clamped to [0, 100],
    /// probability to [0, 1]; NaN collapses to 0.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        signal_type: SignalType,
        severity: f64,
        probability: f64,
        impact: f64,
        description: impl Into<String>,
        indicators: RuleIndicators,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            signal_type,
            severity: clamp_finite(severity, 100.0),
            probability: clamp_finite(probability, 1.0),
            impact: clamp_finite(impact, 100.0),
            centrality: None,
            description: description.into(),
            location: None,
            correlations: Vec::new(),
            cluster_id: None,
            indicators,
            timestamp,
        }
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_correlations(mut self, correlations: &[SignalType]) -> Self {
        self.correlations = correlations.to_vec();
        self
    }

    /// severity × probability, in [0, 100].
    pub fn risk_score(&self) -> f64 {
        self.severity * self.probability
    }

    /// Final ranking key: severity × probability × (1 + centrality).
    pub fn rank_score(&self) -> f64 {
        self.risk_score() * (1.0 + self.centrality.unwrap_or(0.0))
    }

    /// Whether two signals carry the same named location.
    pub fn shares_location(&self, other: &Signal) -> bool {
        match (&self.location, &other.location) {
            (Some(a), Some(b)) => a.name == b.name,
            _ => false,
        }
    }
}

fn clamp_finite(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}
