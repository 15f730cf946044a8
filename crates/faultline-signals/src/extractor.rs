//! SignalExtractor: runs the registered rules over a filtered snapshot.

use chrono::{DateTime, Utc};
use faultline_core::config::{ExtractionConfig, MartingaleConfig};
use faultline_core::errors::RegistryError;
use faultline_core::extraction_span;
use faultline_core::signal::Signal;
use faultline_core::snapshot::DataSnapshot;
use faultline_core::traits::{IRiskRule, RuleContext};
use rayon::prelude::*;
use tracing::debug;

use crate::rules;

/// Evaluates a set of independent rules and collects the signals they emit.
///
/// Output order always follows rule registration order, whether the rules
/// run serially or on the rayon pool. Rule names are unique: they prefix
/// signal ids.
pub struct SignalExtractor {
    rules: Vec<Box<dyn IRiskRule>>,
    config: ExtractionConfig,
    martingale: MartingaleConfig,
}

impl SignalExtractor {
    /// Extractor with the seven built-in rules and default config.
    pub fn new() -> Self {
        Self {
            rules: rules::default_rules(),
            ..Self::empty()
        }
    }

    /// Extractor over a caller-supplied rule set.
    ///
    /// Fails on the first rule whose name is already taken.
    pub fn with_rules(rules: Vec<Box<dyn IRiskRule>>) -> Result<Self, RegistryError> {
        let mut extractor = Self::empty();
        for rule in rules {
            extractor.register(rule)?;
        }
        Ok(extractor)
    }

    fn empty() -> Self {
        Self {
            rules: Vec::new(),
            config: ExtractionConfig::default(),
            martingale: MartingaleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_martingale(mut self, martingale: MartingaleConfig) -> Self {
        self.martingale = martingale;
        self
    }

    /// Register an additional rule after the existing ones.
    pub fn register(&mut self, rule: Box<dyn IRiskRule>) -> Result<(), RegistryError> {
        let name = rule.name();
        if self.rules.iter().any(|r| r.name() == name) {
            return Err(RegistryError::DuplicateRule {
                name: name.to_string(),
            });
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Names of the registered rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule against `snapshot` (already filtered) at time `now`.
    pub fn extract(&self, snapshot: &DataSnapshot, now: DateTime<Utc>) -> Vec<Signal> {
        let _span = extraction_span!(self.rules.len(), self.config.parallel).entered();

        let ctx = RuleContext {
            now,
            martingale: self.martingale,
        };

        let signals: Vec<Signal> = if self.config.parallel {
            self.rules
                .par_iter()
                .filter_map(|rule| rule.evaluate(snapshot, &ctx))
                .collect()
        } else {
            self.rules
                .iter()
                .filter_map(|rule| rule.evaluate(snapshot, &ctx))
                .collect()
        };

        for signal in &signals {
            debug!(
                id = %signal.id,
                signal_type = %signal.signal_type,
                severity = signal.severity,
                probability = signal.probability,
                "rule fired"
            );
        }

        signals
    }
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new()
    }
}
