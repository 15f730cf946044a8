use faultline_core::signal::{RuleIndicators, Signal, SignalType};
use faultline_core::snapshot::{series, DataSnapshot};
use faultline_core::traits::{IRiskRule, RuleContext};

const MARKET_CHANGE_THRESHOLD: f64 = 1.2;
const SECTOR_MOVE_PCT: f64 = 3.0;
const DIVERGENCE_THRESHOLD: usize = 2;
const ECONOMIC_RISK_THRESHOLD: f64 = 10.0;

const VIX_STRESS_LEVEL: f64 = 25.0;
const VIX_RISK: f64 = 20.0;
const INVERSION_RISK: f64 = 15.0;
const UNEMPLOYMENT_JUMP: f64 = 0.2;
const UNEMPLOYMENT_RISK: f64 = 10.0;

const CHANGE_WEIGHT: f64 = 25.0;
const DIVERGENCE_WEIGHT: f64 = 10.0;
const PROBABILITY: f64 = 0.45;
const IMPACT: f64 = 85.0;

/// Broad market moves, sector dispersion, and macro stress.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketFractureRule;

impl IRiskRule for MarketFractureRule {
    fn name(&self) -> &'static str {
        "market-fracture"
    }

    fn evaluate(&self, snapshot: &DataSnapshot, ctx: &RuleContext) -> Option<Signal> {
        let market_change = mean_abs_change(snapshot);
        let sector_divergence = snapshot
            .sectors
            .iter()
            .filter(|s| s.change.abs() > SECTOR_MOVE_PCT)
            .count();
        let economic_risk = macro_stress(snapshot);

        let fires = market_change > MARKET_CHANGE_THRESHOLD
            || sector_divergence > DIVERGENCE_THRESHOLD
            || economic_risk > ECONOMIC_RISK_THRESHOLD;
        if !fires {
            return None;
        }

        let severity = (market_change * CHANGE_WEIGHT
            + sector_divergence as f64 * DIVERGENCE_WEIGHT
            + economic_risk)
            .min(100.0);

        let description = format!(
            "Average market move {market_change:.2}% with {sector_divergence} diverging sectors \
             and macro stress {economic_risk:.0}"
        );

        Some(
            Signal::new(
                ctx.signal_id(self.name()),
                SignalType::Economic,
                severity,
                PROBABILITY,
                IMPACT,
                description,
                RuleIndicators::MarketFracture {
                    market_change,
                    sector_divergence,
                    economic_risk,
                },
                ctx.now,
            )
            .with_correlations(&[SignalType::Geopolitical]),
        )
    }
}

fn mean_abs_change(snapshot: &DataSnapshot) -> f64 {
    if snapshot.markets.is_empty() {
        return 0.0;
    }
    snapshot.markets.iter().map(|m| m.change.abs()).sum::<f64>() / snapshot.markets.len() as f64
}

/// VIX above 25, an inverted 10Y-2Y curve, and a rising unemployment rate
/// each add a fixed amount.
fn macro_stress(snapshot: &DataSnapshot) -> f64 {
    let mut risk = 0.0;
    if snapshot
        .indicator(series::VIX)
        .is_some_and(|i| i.value > VIX_STRESS_LEVEL)
    {
        risk += VIX_RISK;
    }
    if snapshot
        .indicator(series::YIELD_SPREAD_10Y2Y)
        .is_some_and(|i| i.value < 0.0)
    {
        risk += INVERSION_RISK;
    }
    if snapshot
        .indicator(series::UNEMPLOYMENT)
        .is_some_and(|i| i.change > UNEMPLOYMENT_JUMP)
    {
        risk += UNEMPLOYMENT_RISK;
    }
    risk
}
