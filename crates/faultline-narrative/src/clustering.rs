//! Narrative clustering.
//!
//! Two signals are related when any of these hold:
//! - identical type
//! - identical named location
//! - timestamps at most the temporal window apart (default one hour, inclusive)
//!
//! The default greedy pass walks signals in extraction order. Each
//! unassigned signal anchors a new group and claims every unassigned signal
//! related *to the anchor*. Membership is not transitive, so the partition
//! depends on extraction order. `ClusteringStrategy::UnionFind` takes the
//! connected components of the same relation instead.

use chrono::Duration;
use faultline_core::clustering_span;
use faultline_core::config::{ClusteringConfig, ClusteringStrategy};
use faultline_core::models::RiskNarrative;
use faultline_core::signal::Signal;
use petgraph::unionfind::UnionFind;
use tracing::{debug, info};

use crate::titles::narrative_title;

/// Whether `a` and `b` belong in the same narrative.
///
/// The window bound is inclusive: signals exactly one window apart are
/// still "within" it.
pub fn related(a: &Signal, b: &Signal, window: Duration) -> bool {
    a.signal_type == b.signal_type
        || a.shares_location(b)
        || (a.timestamp - b.timestamp).abs() <= window
}

/// Window as a `Duration`, saturating instead of panicking on values
/// chrono cannot represent.
fn temporal_window(secs: i64) -> Duration {
    Duration::try_seconds(secs).unwrap_or(Duration::MAX)
}

/// Partition signal indices into groups. Each group lists its anchor first,
/// members in extraction order.
pub fn group_signals(signals: &[Signal], config: &ClusteringConfig) -> Vec<Vec<usize>> {
    let window = temporal_window(config.temporal_window_secs);
    match config.strategy {
        ClusteringStrategy::Greedy => greedy_groups(signals, window),
        ClusteringStrategy::UnionFind => component_groups(signals, window),
    }
}

fn greedy_groups(signals: &[Signal], window: Duration) -> Vec<Vec<usize>> {
    let n = signals.len();
    let mut assigned = vec![false; n];
    let mut groups = Vec::new();

    for anchor in 0..n {
        if assigned[anchor] {
            continue;
        }
        // Everything before `anchor` is already assigned.
        let members: Vec<usize> = (anchor..n)
            .filter(|&j| {
                !assigned[j] && (j == anchor || related(&signals[anchor], &signals[j], window))
            })
            .collect();
        for &j in &members {
            assigned[j] = true;
        }
        groups.push(members);
    }

    groups
}

fn component_groups(signals: &[Signal], window: Duration) -> Vec<Vec<usize>> {
    let n = signals.len();
    let mut uf = UnionFind::<usize>::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if related(&signals[i], &signals[j], window) {
                uf.union(i, j);
            }
        }
    }
    let labels = uf.into_labeling();

    // Groups ordered by their smallest index, which also serves as anchor.
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut root_to_group: Vec<Option<usize>> = vec![None; n];
    for (idx, &root) in labels.iter().enumerate() {
        match root_to_group[root] {
            Some(g) => groups[g].push(idx),
            None => {
                root_to_group[root] = Some(groups.len());
                groups.push(vec![idx]);
            }
        }
    }
    groups
}

/// Group `signals` into narratives, stamping each signal's `cluster_id`.
///
/// Narrative ids are `narrative-<k>` in creation order; the returned list
/// is sorted by aggregate risk, descending (ties keep creation order).
pub fn cluster_signals(signals: &mut [Signal], config: &ClusteringConfig) -> Vec<RiskNarrative> {
    let _span = clustering_span!(signals.len(), config.strategy).entered();

    let groups = group_signals(signals, config);

    let mut narratives = Vec::with_capacity(groups.len());
    for (k, indices) in groups.iter().enumerate() {
        let id = format!("narrative-{k}");
        for &i in indices {
            signals[i].cluster_id = Some(id.clone());
        }

        let members: Vec<&Signal> = indices.iter().map(|&i| &signals[i]).collect();
        let title = narrative_title(&members);
        if let Some(narrative) = RiskNarrative::from_members(id, title, &members) {
            debug!(
                id = %narrative.id,
                members = narrative.len(),
                aggregate_risk = narrative.aggregate_risk,
                "narrative formed"
            );
            narratives.push(narrative);
        }
    }

    narratives.sort_by(|a, b| b.aggregate_risk.total_cmp(&a.aggregate_risk));

    info!(
        signals = signals.len(),
        narratives = narratives.len(),
        "clustering complete"
    );
    narratives
}
