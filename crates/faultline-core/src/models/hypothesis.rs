use serde::{Deserialize, Serialize};

/// Probability/impact coordinates of the overall assessment, both in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMatrix {
    pub probability: f64,
    pub impact: f64,
}

/// Qualitative reading of the global risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hypothesis {
    pub title: String,
    pub summary: String,
    pub commentary: String,
    /// Ordered reasoning lines, baseline first.
    pub reasoning: Vec<String>,
    /// [0, 0.95]
    pub confidence: f64,
    pub risk_matrix: RiskMatrix,
}
