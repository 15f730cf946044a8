//! Dimension matrix placeholder.
//!
//! Each cell is an independent uniform draw in [0, 1) scaled by
//! `global_risk_score / 100`, paired with six fixed labels. The shape is
//! what the reporting layer consumes; the values carry no statistical
//! meaning.

use faultline_core::config::{defaults, CorrelationConfig};
use faultline_core::models::CorrelationMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fresh RNG for one run: seeded when configured, OS entropy otherwise.
pub fn correlation_rng(config: &CorrelationConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn correlation_matrix<R: Rng>(global_risk_score: f64, rng: &mut R) -> CorrelationMatrix {
    let scale = global_risk_score / 100.0;
    let dim = defaults::CORRELATION_LABELS.len();
    let values: Vec<Vec<f64>> = (0..dim)
        .map(|_| (0..dim).map(|_| rng.gen::<f64>() * scale).collect())
        .collect();
    CorrelationMatrix {
        labels: defaults::CORRELATION_LABELS.iter().map(|l| l.to_string()).collect(),
        values,
    }
}
