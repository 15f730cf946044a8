use faultline_core::signal::{GeoPoint, RuleIndicators, Signal, SignalType};
use faultline_core::snapshot::DataSnapshot;
use faultline_core::traits::{IRiskRule, RuleContext};

use crate::primitives::martingale_risk_with;

const FATALITY_WEIGHT: f64 = 5.0;
const SCORE_THRESHOLD: f64 = 20.0;
const PROBABILITY: f64 = 0.55;
const IMPACT: f64 = 75.0;

/// Unrest scored by Martingale accumulation of weighted fatalities.
///
/// The protest array is read in snapshot order, last element most recent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialUnrestRule;

impl IRiskRule for SocialUnrestRule {
    fn name(&self) -> &'static str {
        "social-unrest"
    }

    fn evaluate(&self, snapshot: &DataSnapshot, ctx: &RuleContext) -> Option<Signal> {
        let values: Vec<f64> = snapshot
            .protests
            .iter()
            .map(|p| p.fatalities as f64 * FATALITY_WEIGHT)
            .collect();
        let score = martingale_risk_with(&values, &ctx.martingale);
        if !(score > SCORE_THRESHOLD) {
            return None;
        }

        let total_fatalities: u64 = snapshot.protests.iter().map(|p| p.fatalities as u64).sum();
        let event_count = snapshot.protests.len();

        let description = format!(
            "Unrest accumulation {score:.1} across {event_count} events with {total_fatalities} fatalities"
        );

        let mut signal = Signal::new(
            ctx.signal_id(self.name()),
            SignalType::Social,
            score,
            PROBABILITY,
            IMPACT,
            description,
            RuleIndicators::SocialUnrest {
                event_count,
                total_fatalities,
                martingale_score: score,
            },
            ctx.now,
        )
        .with_correlations(&[SignalType::Geopolitical, SignalType::Economic]);

        // Anchor on the deadliest event; the first one wins ties.
        let deadliest = snapshot
            .protests
            .iter()
            .reduce(|best, p| if p.fatalities > best.fatalities { p } else { best });
        if let Some(p) = deadliest.filter(|p| !p.place_name().is_empty()) {
            signal = signal.with_location(GeoPoint::new(p.lat, p.lon, p.place_name()));
        }

        Some(signal)
    }
}
