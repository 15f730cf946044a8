use chrono::{TimeZone, Utc};
use faultline_core::errors::{FaultlineError, SnapshotError};
use faultline_core::models::{
    Analysis, CorrelationMatrix, Hypothesis, MartingaleMetrics, RiskMatrix, RiskNarrative,
    TrendDirection,
};
use faultline_core::signal::{RuleIndicators, Signal, SignalType};
use faultline_core::snapshot::DataSnapshot;
use proptest::prelude::*;

fn signal(id: &str, t: SignalType, severity: f64, probability: f64) -> Signal {
    Signal::new(
        id,
        t,
        severity,
        probability,
        40.0,
        id,
        RuleIndicators::Custom {
            values: Default::default(),
        },
        Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
    )
}

fn analysis(signals: Vec<Signal>, narratives: Vec<RiskNarrative>) -> Analysis {
    Analysis {
        signals,
        narratives,
        global_risk_score: 0.0,
        trend_direction: TrendDirection::Stable,
        hypothesis: Hypothesis {
            title: String::new(),
            summary: String::new(),
            commentary: String::new(),
            reasoning: Vec::new(),
            confidence: 0.4,
            risk_matrix: RiskMatrix {
                probability: 0.0,
                impact: 0.5,
            },
        },
        martingale_metrics: MartingaleMetrics {
            accumulation_rate: 1.0,
            decay_factor: 0.95,
            compounded_risk: 0.0,
        },
        high_risk_regions: Vec::new(),
        correlation_matrix: CorrelationMatrix {
            labels: Vec::new(),
            values: Vec::new(),
        },
        timestamp: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
    }
}

// ---- RiskNarrative ----

#[test]
fn narrative_from_members_uses_anchor_dimension() {
    let a = signal("a", SignalType::Environmental, 80.0, 0.5);
    let b = signal("b", SignalType::Social, 40.0, 0.5);
    let n = RiskNarrative::from_members("narrative-0", "t", &[&a, &b]).unwrap();
    assert_eq!(n.primary_dimension, SignalType::Environmental);
    assert!((n.aggregate_risk - 30.0).abs() < 1e-12);
    assert!((n.momentum - 0.6).abs() < 1e-12);
    assert!(n.contains("b"));
    assert!(!n.contains("c"));
}

#[test]
fn narrative_from_no_members_is_none() {
    assert!(RiskNarrative::from_members("n", "t", &[]).is_none());
}

// ---- Analysis helpers ----

#[test]
fn narrative_members_resolve_by_id() {
    let a = signal("a", SignalType::Cyber, 50.0, 0.5);
    let b = signal("b", SignalType::Cyber, 30.0, 0.5);
    let n = RiskNarrative::from_members("narrative-0", "t", &[&a, &b]).unwrap();
    let out = analysis(vec![b.clone(), a.clone()], vec![n]);
    let top = out.top_narrative().unwrap();
    let ids: Vec<&str> = out.narrative_members(top).map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn top_signals_saturates_at_len() {
    let out = analysis(vec![signal("a", SignalType::Cyber, 50.0, 0.5)], vec![]);
    assert_eq!(out.top_signals(10).len(), 1);
    assert!(analysis(vec![], vec![]).top_signals(3).is_empty());
}

#[test]
fn trend_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&TrendDirection::DeEscalating).unwrap(),
        "\"de-escalating\""
    );
    assert_eq!(TrendDirection::Escalating.to_string(), "escalating");
}

#[test]
fn analysis_json_round_trips() {
    let out = analysis(vec![signal("a", SignalType::Military, 50.0, 0.5)], vec![]);
    let back: Analysis = serde_json::from_str(&out.to_json().unwrap()).unwrap();
    assert_eq!(back, out);
}

// ---- Snapshot boundary ----

#[test]
fn malformed_snapshot_is_decode_error() {
    let err = DataSnapshot::from_json("[1, 2").unwrap_err();
    assert!(matches!(err, SnapshotError::Decode(_)));
    let wrapped: FaultlineError = err.into();
    assert!(wrapped.to_string().contains("snapshot"));
}

#[test]
fn unknown_outage_severity_decodes_as_unknown() {
    let snapshot =
        DataSnapshot::from_json(r#"{ "outages": [{ "id": "o", "severity": "catastrophic" }] }"#)
            .unwrap();
    assert!(!snapshot.outages[0].severity.is_severe());
}

// ---- Properties ----

proptest! {
    #[test]
    fn prop_signal_fields_always_clamped(
        severity in prop::num::f64::ANY,
        probability in prop::num::f64::ANY,
        impact in prop::num::f64::ANY,
    ) {
        let s = Signal::new(
            "s",
            SignalType::Geopolitical,
            severity,
            probability,
            impact,
            "s",
            RuleIndicators::Custom { values: Default::default() },
            Utc::now(),
        );
        prop_assert!((0.0..=100.0).contains(&s.severity));
        prop_assert!((0.0..=1.0).contains(&s.probability));
        prop_assert!((0.0..=100.0).contains(&s.impact));
    }

    #[test]
    fn prop_narrative_aggregate_is_member_mean(
        specs in prop::collection::vec((0.0f64..100.0, 0.0f64..1.0), 1..12),
    ) {
        let signals: Vec<Signal> = specs
            .iter()
            .enumerate()
            .map(|(i, &(sev, prob))| signal(&format!("s{i}"), SignalType::Social, sev, prob))
            .collect();
        let refs: Vec<&Signal> = signals.iter().collect();
        let n = RiskNarrative::from_members("n", "t", &refs).unwrap();
        let mean = specs.iter().map(|(s, p)| s * p).sum::<f64>() / specs.len() as f64;
        prop_assert!((n.aggregate_risk - mean).abs() < 1e-9);
        prop_assert_eq!(n.len(), specs.len());
    }
}
