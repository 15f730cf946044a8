//! Centrality: fixed-iteration damped propagation over related signals.
//!
//! ```text
//! w⁰[i]       = 1 / N
//! next[j]     = (1 - d) / N + Σ_{i≠j, linked(i,j)} d × w[i] × severity[i] / 100
//! w^{k+1}     = next / Σ next          (skipped when Σ next = 0)
//! ```
//!
//! `linked(i, j)` holds when the two signals share a type or a narrative.
//! Cost is O(iterations × N²). N is tens of signals per run; large
//! populations need a sparse adjacency instead of more iterations.

use faultline_core::centrality_span;
use faultline_core::config::CentralityConfig;
use faultline_core::signal::Signal;
use tracing::debug;

/// Assigns each signal its relative systemic-influence weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct CentralityEngine {
    config: CentralityConfig,
}

impl CentralityEngine {
    pub fn new(config: CentralityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CentralityConfig {
        &self.config
    }

    /// Compute the centrality vector without touching the signals.
    pub fn compute(&self, signals: &[Signal]) -> Vec<f64> {
        let n = signals.len();
        if n == 0 {
            return Vec::new();
        }

        let damping = self.config.damping;
        let base = (1.0 - damping) / n as f64;
        let links = adjacency(signals);
        let mut weights = vec![1.0 / n as f64; n];

        for round in 0..self.config.iterations {
            let mut next = vec![base; n];
            for (i, row) in links.iter().enumerate() {
                let push = damping * weights[i] * (signals[i].severity / 100.0);
                for &j in row {
                    next[j] += push;
                }
            }

            let sum: f64 = next.iter().sum();
            if sum > 0.0 {
                for w in &mut next {
                    *w /= sum;
                }
            }
            weights = next;
            debug!(round, "centrality round complete");
        }

        weights
    }

    /// Compute and stamp `centrality` on every signal.
    pub fn apply(&self, signals: &mut [Signal]) {
        let _span = centrality_span!(signals.len(), self.config.iterations).entered();
        let weights = self.compute(signals);
        for (signal, w) in signals.iter_mut().zip(weights) {
            signal.centrality = Some(w);
        }
    }
}

/// Whether weight flows between two distinct signals.
fn linked(a: &Signal, b: &Signal) -> bool {
    if a.signal_type == b.signal_type {
        return true;
    }
    match (&a.cluster_id, &b.cluster_id) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Outgoing neighbour lists, built once per run.
fn adjacency(signals: &[Signal]) -> Vec<Vec<usize>> {
    let n = signals.len();
    let mut links = vec![Vec::new(); n];
    for i in 0..n {
        for j in 0..n {
            if i != j && linked(&signals[i], &signals[j]) {
                links[i].push(j);
            }
        }
    }
    links
}
