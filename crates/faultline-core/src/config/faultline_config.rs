//! Top-level Faultline configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    defaults, CentralityConfig, ClusteringConfig, ClusteringStrategy, CorrelationConfig,
    ExtractionConfig, MartingaleConfig, SourcingConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FAULTLINE_*`)
/// 2. TOML file passed to [`FaultlineConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultlineConfig {
    pub sourcing: SourcingConfig,
    pub martingale: MartingaleConfig,
    pub clustering: ClusteringConfig,
    pub centrality: CentralityConfig,
    pub correlation: CorrelationConfig,
    pub extraction: ExtractionConfig,
    /// Replace non-finite numeric inputs with zero before filtering.
    pub sanitize_inputs: bool,
}

impl Default for FaultlineConfig {
    fn default() -> Self {
        Self {
            sourcing: SourcingConfig::default(),
            martingale: MartingaleConfig::default(),
            clustering: ClusteringConfig::default(),
            centrality: CentralityConfig::default(),
            correlation: CorrelationConfig::default(),
            extraction: ExtractionConfig::default(),
            sanitize_inputs: defaults::DEFAULT_SANITIZE_INPUTS,
        }
    }
}

impl FaultlineConfig {
    /// Load configuration from an optional TOML file, then apply env overrides.
    ///
    /// A missing `path` means compiled defaults. A path that does not exist
    /// is an error; the caller asked for it explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_toml_file(p)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &FaultlineConfig) -> Result<(), ConfigError> {
        let c = &config.centrality;
        if c.iterations == 0 {
            return Err(invalid("centrality.iterations", "must be greater than 0"));
        }
        if !(c.damping > 0.0 && c.damping <= 1.0) {
            return Err(invalid("centrality.damping", "must be in (0.0, 1.0]"));
        }

        let m = &config.martingale;
        if !(m.decay > 0.0 && m.decay <= 1.0) {
            return Err(invalid("martingale.decay", "must be in (0.0, 1.0]"));
        }
        if !(m.shock_multiplier >= 1.0) {
            return Err(invalid("martingale.shock_multiplier", "must be at least 1.0"));
        }

        let s = &config.sourcing;
        if !(s.min_market_move_pct >= 0.0) {
            return Err(invalid("sourcing.min_market_move_pct", "must be non-negative"));
        }
        if !(s.min_quake_magnitude >= 0.0) {
            return Err(invalid("sourcing.min_quake_magnitude", "must be non-negative"));
        }
        let band_ok = (0.0..=1.0).contains(&s.prediction_price_floor)
            && (0.0..=1.0).contains(&s.prediction_price_ceiling)
            && s.prediction_price_floor < s.prediction_price_ceiling;
        if !band_ok {
            return Err(invalid(
                "sourcing.prediction_price_floor",
                "floor and ceiling must lie in [0.0, 1.0] with floor < ceiling",
            ));
        }

        let window = config.clustering.temporal_window_secs;
        if !(0..=defaults::MAX_TEMPORAL_WINDOW_SECS).contains(&window) {
            return Err(invalid(
                "clustering.temporal_window_secs",
                "must be in [0, 2592000] (at most 30 days)",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `FAULTLINE_CENTRALITY_DAMPING`, `FAULTLINE_CORRELATION_SEED`, etc.
    /// Values that do not parse are logged and ignored.
    fn apply_env_overrides(config: &mut FaultlineConfig) {
        if let Some(v) = env_parse::<usize>("FAULTLINE_CENTRALITY_ITERATIONS") {
            config.centrality.iterations = v;
        }
        if let Some(v) = env_parse::<f64>("FAULTLINE_CENTRALITY_DAMPING") {
            config.centrality.damping = v;
        }
        if let Some(v) = env_parse::<f64>("FAULTLINE_MARTINGALE_DECAY") {
            config.martingale.decay = v;
        }
        if let Some(v) = env_parse::<i64>("FAULTLINE_CLUSTERING_WINDOW_SECS") {
            config.clustering.temporal_window_secs = v;
        }
        if let Ok(val) = std::env::var("FAULTLINE_CLUSTERING_STRATEGY") {
            match val.to_ascii_lowercase().as_str() {
                "greedy" => config.clustering.strategy = ClusteringStrategy::Greedy,
                "union_find" | "union-find" => {
                    config.clustering.strategy = ClusteringStrategy::UnionFind
                }
                _ => warn!(
                    key = "FAULTLINE_CLUSTERING_STRATEGY",
                    value = %val,
                    "unknown clustering strategy, expected greedy or union_find; ignoring"
                ),
            }
        }
        if let Some(v) = env_parse::<u64>("FAULTLINE_CORRELATION_SEED") {
            config.correlation.seed = Some(v);
        }
        if let Some(v) = env_parse::<bool>("FAULTLINE_EXTRACTION_PARALLEL") {
            config.extraction.parallel = v;
        }
        if let Some(v) = env_parse::<bool>("FAULTLINE_SANITIZE_INPUTS") {
            config.sanitize_inputs = v;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "unparseable env override ignored");
            None
        }
    }
}
