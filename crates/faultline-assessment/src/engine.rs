//! AnalysisEngine: runs the five stages over one snapshot.

use std::path::Path;

use faultline_core::clock::SystemClock;
use faultline_core::config::FaultlineConfig;
use faultline_core::errors::{ConfigError, FaultlineResult, RegistryError};
use faultline_core::models::Analysis;
use faultline_core::snapshot::DataSnapshot;
use faultline_core::traits::{IClock, IRiskRule};
use faultline_core::{aggregation_span, sourcing_span};
use faultline_narrative::{cluster_signals, CentralityEngine};
use faultline_signals::{sanitize_snapshot, source_candidates, SignalExtractor};
use tracing::info;

use crate::{aggregation, correlation, hypothesis, ranking, regions};

/// End-to-end systemic-risk analysis.
///
/// Holds no state between runs. Each [`analyze`](Self::analyze) call reads
/// the clock once and builds a fresh RNG for the correlation fill, so
/// concurrent calls through `&self` are independent.
pub struct AnalysisEngine {
    config: FaultlineConfig,
    clock: Box<dyn IClock>,
    extractor: SignalExtractor,
    centrality: CentralityEngine,
}

impl AnalysisEngine {
    /// Engine with compiled defaults and the system clock.
    pub fn new() -> Self {
        Self::build(FaultlineConfig::default())
    }

    /// Engine over a caller-built config. The config is validated first, so
    /// out-of-range values are rejected here instead of corrupting a run.
    pub fn with_config(config: FaultlineConfig) -> Result<Self, ConfigError> {
        FaultlineConfig::validate(&config)?;
        Ok(Self::build(config))
    }

    /// Resolve config from defaults, an optional TOML file and `FAULTLINE_*`
    /// env vars, then build the engine.
    pub fn from_config_file(path: Option<&Path>) -> FaultlineResult<Self> {
        // `load` validates.
        Ok(Self::build(FaultlineConfig::load(path)?))
    }

    fn build(config: FaultlineConfig) -> Self {
        let extractor = SignalExtractor::new()
            .with_config(config.extraction)
            .with_martingale(config.martingale);
        Self {
            centrality: CentralityEngine::new(config.centrality),
            config,
            clock: Box::new(SystemClock),
            extractor,
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn IClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Append a rule after the built-in seven. Names must be unique.
    pub fn register_rule(&mut self, rule: Box<dyn IRiskRule>) -> Result<(), RegistryError> {
        self.extractor.register(rule)
    }

    pub fn config(&self) -> &FaultlineConfig {
        &self.config
    }

    pub fn extractor(&self) -> &SignalExtractor {
        &self.extractor
    }

    /// Decode a JSON snapshot and analyze it.
    pub fn analyze_json(&self, json: &str) -> FaultlineResult<Analysis> {
        let snapshot = DataSnapshot::from_json(json)?;
        Ok(self.analyze(&snapshot))
    }

    /// Run the full pipeline. Never fails: sparse or empty input yields a
    /// zero-signal, zero-score analysis.
    pub fn analyze(&self, snapshot: &DataSnapshot) -> Analysis {
        let now = self.clock.now();

        let candidates = {
            let _span = sourcing_span!(snapshot.record_count()).entered();
            if self.config.sanitize_inputs {
                source_candidates(&sanitize_snapshot(snapshot), &self.config.sourcing)
            } else {
                source_candidates(snapshot, &self.config.sourcing)
            }
        };

        let mut signals = self.extractor.extract(&candidates, now);
        let narratives = cluster_signals(&mut signals, &self.config.clustering);
        self.centrality.apply(&mut signals);
        ranking::rank_signals(&mut signals);

        let _span = aggregation_span!(narratives.len()).entered();

        let global_risk_score = aggregation::global_risk_score(&narratives);
        let trend_direction = aggregation::trend_direction(global_risk_score);
        let hypothesis = hypothesis::synthesize(global_risk_score, &narratives, &signals);
        let martingale_metrics = aggregation::martingale_metrics(narratives.len(), global_risk_score);
        let high_risk_regions = regions::high_risk_regions(&signals);
        let mut rng = correlation::correlation_rng(&self.config.correlation);
        let correlation_matrix = correlation::correlation_matrix(global_risk_score, &mut rng);

        info!(
            signals = signals.len(),
            narratives = narratives.len(),
            global_risk_score,
            trend = %trend_direction,
            hypothesis = %hypothesis.title,
            "analysis complete"
        );

        Analysis {
            signals,
            narratives,
            global_risk_score,
            trend_direction,
            hypothesis,
            martingale_metrics,
            high_risk_regions,
            correlation_matrix,
            timestamp: now,
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
