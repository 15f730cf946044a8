use faultline_core::signal::{RuleIndicators, Signal, SignalType};
use faultline_core::snapshot::DataSnapshot;
use faultline_core::traits::{IRiskRule, RuleContext};

use crate::primitives::bayesian_update;

const VESSEL_WEIGHT: usize = 2;
const FLIGHT_WEIGHT: usize = 5;
const ACTIVITY_THRESHOLD: f64 = 10.0;
/// Activity above this counts as strong evidence in the Bayesian update.
const STRONG_ACTIVITY: f64 = 30.0;
/// Prediction markets priced above this count toward stress.
const HIGH_CONVICTION_PRICE: f64 = 0.6;
const STRESS_THRESHOLD: usize = 2;
const STRESS_WEIGHT: f64 = 15.0;

const PRIOR: f64 = 0.1;
const STRONG_LIKELIHOOD: f64 = 0.9;
const WEAK_LIKELIHOOD: f64 = 0.4;
const EVIDENCE: f64 = 0.2;
const IMPACT: f64 = 95.0;

/// Military movement converging with prediction-market stress.
#[derive(Debug, Clone, Copy, Default)]
pub struct MilitaryConvergenceRule;

impl IRiskRule for MilitaryConvergenceRule {
    fn name(&self) -> &'static str {
        "military-convergence"
    }

    fn evaluate(&self, snapshot: &DataSnapshot, ctx: &RuleContext) -> Option<Signal> {
        let vessel_count = snapshot.military_vessels.len();
        let flight_count = snapshot.military_flights.len();
        let mil_activity = (vessel_count * VESSEL_WEIGHT + flight_count * FLIGHT_WEIGHT) as f64;
        let prediction_stress = snapshot
            .predictions
            .iter()
            .filter(|p| p.yes_price > HIGH_CONVICTION_PRICE)
            .count();

        if mil_activity <= ACTIVITY_THRESHOLD && prediction_stress <= STRESS_THRESHOLD {
            return None;
        }

        let likelihood = if mil_activity > STRONG_ACTIVITY {
            STRONG_LIKELIHOOD
        } else {
            WEAK_LIKELIHOOD
        };
        let probability = bayesian_update(PRIOR, likelihood, EVIDENCE);
        let severity = (mil_activity + prediction_stress as f64 * STRESS_WEIGHT).min(100.0);

        let description = format!(
            "Military activity index {mil_activity:.0} ({vessel_count} vessels, {flight_count} flights) \
             alongside {prediction_stress} high-conviction prediction markets"
        );

        Some(
            Signal::new(
                ctx.signal_id(self.name()),
                SignalType::Military,
                severity,
                probability,
                IMPACT,
                description,
                RuleIndicators::MilitaryConvergence {
                    vessel_count,
                    flight_count,
                    mil_activity,
                    prediction_stress,
                    likelihood,
                },
                ctx.now,
            )
            .with_correlations(&[SignalType::Geopolitical, SignalType::Economic]),
        )
    }
}
