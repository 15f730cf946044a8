use faultline_core::signal::{GeoPoint, RuleIndicators, Signal, SignalType};
use faultline_core::snapshot::DataSnapshot;
use faultline_core::traits::{IRiskRule, RuleContext};

const OUTAGE_WEIGHT: f64 = 30.0;
const PROBABILITY: f64 = 0.3;
const IMPACT: f64 = 80.0;

/// Total or major infrastructure outages.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfrastructureRule;

impl IRiskRule for InfrastructureRule {
    fn name(&self) -> &'static str {
        "infrastructure"
    }

    fn evaluate(&self, snapshot: &DataSnapshot, ctx: &RuleContext) -> Option<Signal> {
        let severe: Vec<_> = snapshot
            .outages
            .iter()
            .filter(|o| o.severity.is_severe())
            .collect();
        if severe.is_empty() {
            return None;
        }

        let severe_outage_count = severe.len();
        let severity = (severe_outage_count as f64 * OUTAGE_WEIGHT).min(100.0);
        let description = format!("{severe_outage_count} total or major infrastructure outages");

        let mut signal = Signal::new(
            ctx.signal_id(self.name()),
            SignalType::Infrastructure,
            severity,
            PROBABILITY,
            IMPACT,
            description,
            RuleIndicators::Infrastructure { severe_outage_count },
            ctx.now,
        )
        .with_correlations(&[SignalType::Cyber, SignalType::Economic]);

        let located = severe.iter().find_map(|o| {
            let name = if o.country.is_empty() { &o.title } else { &o.country };
            match (o.lat, o.lon) {
                (Some(lat), Some(lon)) if !name.is_empty() => {
                    Some(GeoPoint::new(lat, lon, name.clone()))
                }
                _ => None,
            }
        });
        if let Some(point) = located {
            signal = signal.with_location(point);
        }

        Some(signal)
    }
}
