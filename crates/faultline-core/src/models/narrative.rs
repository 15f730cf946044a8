use serde::{Deserialize, Serialize};

use crate::signal::{Signal, SignalType};

/// A community of related signals.
///
/// Members are referenced by signal id; the signals themselves live once in
/// [`Analysis::signals`](super::Analysis::signals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskNarrative {
    pub id: String,
    pub title: String,
    pub signal_ids: Vec<String>,
    /// mean(severity × probability) over members.
    pub aggregate_risk: f64,
    /// member_count × aggregate_risk / 100.
    pub momentum: f64,
    /// Type of the anchor signal.
    pub primary_dimension: SignalType,
}

impl RiskNarrative {
    /// Build a narrative from its members. `members[0]` is the anchor.
    ///
    /// Returns `None` for an empty member list.
    pub fn from_members(id: impl Into<String>, title: impl Into<String>, members: &[&Signal]) -> Option<Self> {
        let anchor = members.first()?;
        let aggregate_risk =
            members.iter().map(|s| s.risk_score()).sum::<f64>() / members.len() as f64;
        Some(Self {
            id: id.into(),
            title: title.into(),
            signal_ids: members.iter().map(|s| s.id.clone()).collect(),
            aggregate_risk,
            momentum: members.len() as f64 * (aggregate_risk / 100.0),
            primary_dimension: anchor.signal_type,
        })
    }

    pub fn len(&self) -> usize {
        self.signal_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signal_ids.is_empty()
    }

    pub fn contains(&self, signal_id: &str) -> bool {
        self.signal_ids.iter().any(|id| id == signal_id)
    }
}
