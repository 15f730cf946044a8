use chrono::{DateTime, Utc};

use crate::config::MartingaleConfig;
use crate::signal::Signal;
use crate::snapshot::DataSnapshot;

/// Inputs shared by every rule in one extraction pass.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    pub now: DateTime<Utc>,
    pub martingale: MartingaleConfig,
}

impl RuleContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            martingale: MartingaleConfig::default(),
        }
    }

    /// Deterministic signal id: `<rule>-<now millis>`.
    pub fn signal_id(&self, rule: &str) -> String {
        format!("{rule}-{}", self.now.timestamp_millis())
    }
}

/// A pure rule evaluator: reads the filtered snapshot and emits at most one signal.
///
/// Implementations must not depend on evaluation order; the extractor may
/// run them in parallel.
pub trait IRiskRule: Send + Sync {
    /// Stable rule name, also used as the signal id prefix.
    fn name(&self) -> &'static str;

    fn evaluate(&self, snapshot: &DataSnapshot, ctx: &RuleContext) -> Option<Signal>;
}
