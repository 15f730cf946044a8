//! Candidate sourcing: narrows each snapshot array to its high-signal subset.
//!
//! | Array | Kept when |
//! |-------|-----------|
//! | markets | \|change\| > 0.5 |
//! | earthquakes | magnitude > 3.0 |
//! | protests | fatalities > 0, or "violence" in event type / summary |
//! | outages | severity is not `minor` |
//! | predictions | 0.05 < yes-price < 0.95 |
//!
//! Vessels, flights, and every other array pass through unchanged.

use faultline_core::config::SourcingConfig;
use faultline_core::snapshot::{DataSnapshot, OutageSeverity, ProtestEvent};
use tracing::debug;

/// Filter a snapshot down to its candidates. The input is not modified.
pub fn source_candidates(snapshot: &DataSnapshot, config: &SourcingConfig) -> DataSnapshot {
    let keyword = config.protest_keyword.to_lowercase();

    let filtered = DataSnapshot {
        markets: snapshot
            .markets
            .iter()
            .filter(|m| m.change.abs() > config.min_market_move_pct)
            .cloned()
            .collect(),
        earthquakes: snapshot
            .earthquakes
            .iter()
            .filter(|q| q.magnitude > config.min_quake_magnitude)
            .cloned()
            .collect(),
        protests: snapshot
            .protests
            .iter()
            .filter(|p| p.fatalities > 0 || mentions(p, &keyword))
            .cloned()
            .collect(),
        outages: snapshot
            .outages
            .iter()
            .filter(|o| o.severity != OutageSeverity::Minor)
            .cloned()
            .collect(),
        predictions: snapshot
            .predictions
            .iter()
            .filter(|p| {
                p.yes_price > config.prediction_price_floor
                    && p.yes_price < config.prediction_price_ceiling
            })
            .cloned()
            .collect(),
        ..snapshot.clone()
    };

    debug!(
        markets = filtered.markets.len(),
        earthquakes = filtered.earthquakes.len(),
        protests = filtered.protests.len(),
        outages = filtered.outages.len(),
        predictions = filtered.predictions.len(),
        "candidates sourced"
    );

    filtered
}

fn mentions(protest: &ProtestEvent, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    protest.event_type.to_lowercase().contains(keyword)
        || protest.summary.to_lowercase().contains(keyword)
}
