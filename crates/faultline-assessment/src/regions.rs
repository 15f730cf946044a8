use faultline_core::config::defaults;
use faultline_core::models::HighRiskRegion;
use faultline_core::signal::Signal;

/// Hotspots: located signals with severity above 30, highest risk first.
pub fn high_risk_regions(signals: &[Signal]) -> Vec<HighRiskRegion> {
    let mut regions: Vec<HighRiskRegion> = signals
        .iter()
        .filter(|s| s.severity > defaults::HOTSPOT_MIN_SEVERITY)
        .filter_map(|s| {
            let loc = s.location.as_ref()?;
            Some(HighRiskRegion {
                name: loc.name.clone(),
                lat: loc.lat,
                lon: loc.lon,
                risk_score: s.risk_score(),
                primary_threat: s.signal_type,
            })
        })
        .collect();
    regions.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
    regions
}
