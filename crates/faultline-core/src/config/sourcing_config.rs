use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate sourcing thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcingConfig {
    /// Markets pass when |change| (percent) exceeds this.
    pub min_market_move_pct: f64,
    /// Earthquakes pass when magnitude exceeds this.
    pub min_quake_magnitude: f64,
    /// Prediction markets pass when yes-price is strictly above this...
    pub prediction_price_floor: f64,
    /// ...and strictly below this.
    pub prediction_price_ceiling: f64,
    /// Keyword that admits a protest without fatalities (case-insensitive).
    pub protest_keyword: String,
}

impl Default for SourcingConfig {
    fn default() -> Self {
        Self {
            min_market_move_pct: defaults::DEFAULT_MIN_MARKET_MOVE_PCT,
            min_quake_magnitude: defaults::DEFAULT_MIN_QUAKE_MAGNITUDE,
            prediction_price_floor: defaults::DEFAULT_PREDICTION_PRICE_FLOOR,
            prediction_price_ceiling: defaults::DEFAULT_PREDICTION_PRICE_CEILING,
            protest_keyword: defaults::DEFAULT_PROTEST_KEYWORD.to_string(),
        }
    }
}
