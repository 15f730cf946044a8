use faultline_core::signal::{RuleIndicators, Signal, SignalType};
use faultline_core::snapshot::DataSnapshot;
use faultline_core::traits::{IRiskRule, RuleContext};

const OIL_SPIKE_PCT: f64 = 3.0;
const GOLD_SPIKE_PCT: f64 = 1.5;
const CRYPTO_MOVE_PCT: f64 = 10.0;
const CRYPTO_COUNT_THRESHOLD: usize = 1;

const BASE_SEVERITY: f64 = 60.0;
const CRYPTO_WEIGHT: f64 = 5.0;
const PROBABILITY: f64 = 0.4;
const IMPACT: f64 = 50.0;

/// Flight-to-safety and speculative stress in commodities and crypto.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommodityShockRule;

impl IRiskRule for CommodityShockRule {
    fn name(&self) -> &'static str {
        "commodity-shock"
    }

    fn evaluate(&self, snapshot: &DataSnapshot, ctx: &RuleContext) -> Option<Signal> {
        let oil_change = snapshot
            .commodities
            .iter()
            .find(|c| c.is_oil())
            .map(|c| c.change);
        let gold_change = snapshot
            .commodities
            .iter()
            .find(|c| c.is_gold())
            .map(|c| c.change);
        let crypto_vol_count = snapshot
            .crypto
            .iter()
            .filter(|c| c.change.abs() > CRYPTO_MOVE_PCT)
            .count();

        let oil_spike = oil_change.is_some_and(|c| c > OIL_SPIKE_PCT);
        let gold_spike = gold_change.is_some_and(|c| c > GOLD_SPIKE_PCT);
        let crypto_stress = crypto_vol_count > CRYPTO_COUNT_THRESHOLD;
        if !(oil_spike || gold_spike || crypto_stress) {
            return None;
        }

        let severity = (BASE_SEVERITY + crypto_vol_count as f64 * CRYPTO_WEIGHT).min(100.0);

        let mut triggers = Vec::new();
        if oil_spike {
            triggers.push("oil spike");
        }
        if gold_spike {
            triggers.push("gold bid");
        }
        if crypto_stress {
            triggers.push("crypto volatility");
        }
        let description = format!(
            "Commodity and crypto sentiment shock ({}); {crypto_vol_count} crypto assets moving more than 10%",
            triggers.join(", ")
        );

        Some(
            Signal::new(
                ctx.signal_id(self.name()),
                SignalType::Economic,
                severity,
                PROBABILITY,
                IMPACT,
                description,
                RuleIndicators::CommodityShock {
                    oil_change,
                    gold_change,
                    crypto_vol_count,
                },
                ctx.now,
            )
            .with_correlations(&[SignalType::Geopolitical]),
        )
    }
}
