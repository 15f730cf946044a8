use faultline_core::config::defaults::EVIDENCE_FLOOR;

/// Single-step ratio update: `likelihood × prior / max(evidence, 0.001)`.
///
/// Not clamped; callers that need a probability clamp the result.
pub fn bayesian_update(prior: f64, likelihood: f64, evidence: f64) -> f64 {
    likelihood * prior / evidence.max(EVIDENCE_FLOOR)
}
