use faultline_core::signal::{RuleIndicators, Signal, SignalType};
use faultline_core::snapshot::DataSnapshot;
use faultline_core::traits::{IRiskRule, RuleContext};

const ALERT_THRESHOLD: u64 = 10;
const ALERT_WEIGHT: f64 = 3.0;
const PROBABILITY: f64 = 0.2;
const IMPACT: f64 = 60.0;

/// Density of news alerts across categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertDensityRule;

impl IRiskRule for AlertDensityRule {
    fn name(&self) -> &'static str {
        "alert-density"
    }

    fn evaluate(&self, snapshot: &DataSnapshot, ctx: &RuleContext) -> Option<Signal> {
        let total_alerts: u64 = snapshot.alert_counts.values().map(|&c| c as u64).sum();
        if total_alerts <= ALERT_THRESHOLD {
            return None;
        }

        let category_count = snapshot.alert_counts.values().filter(|&&c| c > 0).count();
        let severity = (total_alerts as f64 * ALERT_WEIGHT).min(100.0);
        let description =
            format!("{total_alerts} news alerts across {category_count} categories");

        Some(
            Signal::new(
                ctx.signal_id(self.name()),
                SignalType::Narrative,
                severity,
                PROBABILITY,
                IMPACT,
                description,
                RuleIndicators::AlertDensity {
                    total_alerts,
                    category_count,
                },
                ctx.now,
            )
            .with_correlations(&[SignalType::Social, SignalType::Geopolitical]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snapshot(counts: &[(&str, u32)]) -> DataSnapshot {
        DataSnapshot {
            alert_counts: counts.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn dense_alerts_fire() {
        let signal = AlertDensityRule
            .evaluate(
                &snapshot(&[("conflict", 8), ("markets", 4), ("tech", 0)]),
                &RuleContext::new(Utc::now()),
            )
            .unwrap();
        assert_eq!(signal.severity, 36.0);
        assert_eq!(signal.signal_type, SignalType::Narrative);
        match signal.indicators {
            RuleIndicators::AlertDensity { category_count, .. } => assert_eq!(category_count, 2),
            other => panic!("unexpected indicators {other:?}"),
        }
    }

    #[test]
    fn ten_alerts_is_not_enough() {
        assert!(AlertDensityRule
            .evaluate(&snapshot(&[("conflict", 10)]), &RuleContext::new(Utc::now()))
            .is_none());
    }

    #[test]
    fn severity_caps_at_one_hundred() {
        let signal = AlertDensityRule
            .evaluate(&snapshot(&[("conflict", 50)]), &RuleContext::new(Utc::now()))
            .unwrap();
        assert_eq!(signal.severity, 100.0);
    }
}
