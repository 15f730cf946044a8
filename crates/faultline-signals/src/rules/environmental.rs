use faultline_core::signal::{GeoPoint, RuleIndicators, Signal, SignalType};
use faultline_core::snapshot::DataSnapshot;
use faultline_core::traits::{IRiskRule, RuleContext};

const MAGNITUDE_THRESHOLD: f64 = 5.0;
const WEATHER_THRESHOLD: usize = 10;
const MAGNITUDE_WEIGHT: f64 = 12.0;
const WEATHER_WEIGHT: f64 = 2.0;
const PROBABILITY: f64 = 0.4;
const IMPACT: f64 = 70.0;

/// Seismic and severe-weather pressure.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentalRule;

impl IRiskRule for EnvironmentalRule {
    fn name(&self) -> &'static str {
        "environmental"
    }

    fn evaluate(&self, snapshot: &DataSnapshot, ctx: &RuleContext) -> Option<Signal> {
        let strongest = snapshot
            .earthquakes
            .iter()
            .reduce(|best, q| if q.magnitude > best.magnitude { q } else { best });
        let max_magnitude = strongest.map(|q| q.magnitude).unwrap_or(0.0);
        let weather_alert_count = snapshot.weather_alerts.len();

        if !(max_magnitude > MAGNITUDE_THRESHOLD || weather_alert_count > WEATHER_THRESHOLD) {
            return None;
        }

        let severity = (max_magnitude * MAGNITUDE_WEIGHT
            + weather_alert_count as f64 * WEATHER_WEIGHT)
            .min(100.0);

        let description = format!(
            "Peak seismic magnitude {max_magnitude:.1} with {weather_alert_count} active weather alerts"
        );

        let mut signal = Signal::new(
            ctx.signal_id(self.name()),
            SignalType::Environmental,
            severity,
            PROBABILITY,
            IMPACT,
            description,
            RuleIndicators::Environmental {
                max_magnitude,
                weather_alert_count,
            },
            ctx.now,
        )
        .with_correlations(&[SignalType::Infrastructure, SignalType::Economic]);

        if let Some(q) = strongest.filter(|q| !q.place.is_empty()) {
            signal = signal.with_location(GeoPoint::new(q.lat, q.lon, q.place.clone()));
        }

        Some(signal)
    }
}
