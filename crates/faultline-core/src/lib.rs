//! # faultline-core
//!
//! Foundation crate for the Faultline systemic-risk engine.
//! Defines the input snapshot, signal/narrative/analysis types, traits,
//! errors, config, tracing, and defaults. Every other crate in the
//! workspace depends on this.

pub mod clock;
pub mod config;
pub mod errors;
pub mod models;
pub mod signal;
pub mod snapshot;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use clock::{FixedClock, SystemClock};
pub use config::FaultlineConfig;
pub use errors::{FaultlineError, FaultlineResult};
pub use models::{Analysis, RiskNarrative, TrendDirection};
pub use signal::{GeoPoint, RuleIndicators, Signal, SignalType};
pub use snapshot::DataSnapshot;
pub use traits::{IClock, IRiskRule};
