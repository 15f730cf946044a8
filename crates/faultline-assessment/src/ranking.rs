//! Final signal ranking.

use faultline_core::signal::Signal;

/// Sort by severity × probability × (1 + centrality), descending.
///
/// The sort is stable: equal scores keep extraction order.
pub fn rank_signals(signals: &mut [Signal]) {
    signals.sort_by(|a, b| b.rank_score().total_cmp(&a.rank_score()));
}
