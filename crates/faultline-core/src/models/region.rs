use serde::{Deserialize, Serialize};

use crate::signal::SignalType;

/// Geographic hotspot derived from a located, high-severity signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighRiskRegion {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// severity × probability of the source signal.
    pub risk_score: f64,
    pub primary_threat: SignalType,
}
