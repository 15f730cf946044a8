//! Qualitative hypothesis tiers.

use faultline_core::config::defaults;
use faultline_core::models::{Hypothesis, RiskMatrix, RiskNarrative};
use faultline_core::signal::Signal;

const BASELINE_REASONING: &str =
    "Baseline: signals are read against a background of uncorrelated stochastic variance.";

/// The three readings of the global score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HypothesisTier {
    /// Score above 75.
    SystemicCollapse,
    /// Score above 40.
    StructuralFragility,
    StochasticStability,
}

impl HypothesisTier {
    pub fn for_score(global_risk_score: f64) -> Self {
        if global_risk_score > defaults::COLLAPSE_THRESHOLD {
            Self::SystemicCollapse
        } else if global_risk_score > defaults::ESCALATION_THRESHOLD {
            Self::StructuralFragility
        } else {
            Self::StochasticStability
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SystemicCollapse => "Systemic Collapse Convergence",
            Self::StructuralFragility => "Structural Fragility Alert",
            Self::StochasticStability => "Stochastic Stability",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::SystemicCollapse => {
                "Multiple tail events are correlating across risk dimensions."
            }
            Self::StructuralFragility => {
                "The system sits in a negative-convexity state: small shocks now produce outsized moves."
            }
            Self::StochasticStability => "Observed signals remain within baseline variance.",
        }
    }

    pub fn commentary(self) -> &'static str {
        match self {
            Self::SystemicCollapse => {
                "Fat-tail exposure is compounding. Historical volatility understates the current distribution."
            }
            Self::StructuralFragility => {
                "Hidden leverage in the network means the next shock is unlikely to stay contained."
            }
            Self::StochasticStability => {
                "No dimension is pulling the others along; noise dominates structure."
            }
        }
    }
}

/// Build the hypothesis for one run.
///
/// `narratives` must already be sorted by aggregate risk, descending; the
/// first entry is reported as the dominant narrative.
pub fn synthesize(
    global_risk_score: f64,
    narratives: &[RiskNarrative],
    signals: &[Signal],
) -> Hypothesis {
    let tier = HypothesisTier::for_score(global_risk_score);

    let mut reasoning = vec![BASELINE_REASONING.to_string()];
    if let Some(top) = narratives.first() {
        reasoning.push(format!(
            "Dominant narrative \"{}\" carries aggregate risk {:.1}.",
            top.title, top.aggregate_risk
        ));
    }

    let max_impact = signals
        .iter()
        .map(|s| s.impact)
        .fold(defaults::IMPACT_FLOOR, f64::max);

    Hypothesis {
        title: tier.title().to_string(),
        summary: tier.summary().to_string(),
        commentary: tier.commentary().to_string(),
        reasoning,
        confidence: (defaults::BASE_CONFIDENCE + global_risk_score / defaults::CONFIDENCE_DIVISOR)
            .min(defaults::MAX_CONFIDENCE),
        risk_matrix: RiskMatrix {
            probability: global_risk_score / 100.0,
            impact: max_impact / 100.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use faultline_core::signal::{RuleIndicators, SignalType};

    #[test]
    fn tiers_split_at_forty_and_seventy_five() {
        assert_eq!(HypothesisTier::for_score(0.0), HypothesisTier::StochasticStability);
        assert_eq!(HypothesisTier::for_score(40.0), HypothesisTier::StochasticStability);
        assert_eq!(HypothesisTier::for_score(40.5), HypothesisTier::StructuralFragility);
        assert_eq!(HypothesisTier::for_score(75.0), HypothesisTier::StructuralFragility);
        assert_eq!(HypothesisTier::for_score(75.5), HypothesisTier::SystemicCollapse);
    }

    #[test]
    fn empty_run_is_baseline_only() {
        let h = synthesize(0.0, &[], &[]);
        assert_eq!(h.title, "Stochastic Stability");
        assert_eq!(h.reasoning, vec![BASELINE_REASONING.to_string()]);
        assert!((h.confidence - 0.4).abs() < 1e-12);
        assert_eq!(h.risk_matrix.probability, 0.0);
        assert_eq!(h.risk_matrix.impact, 0.5);
    }

    #[test]
    fn confidence_caps_at_point_nine_five() {
        assert_eq!(synthesize(100.0, &[], &[]).confidence, 0.95);
        // 0.4 + 60/150
        assert!((synthesize(60.0, &[], &[]).confidence - 0.8).abs() < 1e-12);
    }

    #[test]
    fn top_narrative_is_named_in_reasoning() {
        let narrative = RiskNarrative {
            id: "narrative-0".into(),
            title: "Military Cascade (2 signals)".into(),
            signal_ids: vec!["a".into(), "b".into()],
            aggregate_risk: 31.4535,
            momentum: 0.63,
            primary_dimension: SignalType::Military,
        };
        let h = synthesize(51.0, &[narrative], &[]);
        assert_eq!(h.title, "Structural Fragility Alert");
        assert_eq!(h.reasoning.len(), 2);
        assert!(h.reasoning[1].contains("Military Cascade (2 signals)"));
        assert!(h.reasoning[1].contains("31.5"));
    }

    #[test]
    fn impact_uses_max_signal_impact_above_floor() {
        let signal = Signal::new(
            "s",
            SignalType::Military,
            40.0,
            0.5,
            95.0,
            "s",
            RuleIndicators::Custom {
                values: Default::default(),
            },
            Utc::now(),
        );
        assert_eq!(synthesize(10.0, &[], &[signal]).risk_matrix.impact, 0.95);
    }
}
