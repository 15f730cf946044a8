//! # faultline-assessment
//!
//! Stage 5 of the pipeline and the engine that drives all five.
//!
//! After extraction, clustering and centrality, signals are ranked by
//! severity × probability × (1 + centrality). Narratives feed a global
//! score (momentum-weighted mean aggregate risk, capped at 100) which in
//! turn selects the trend, the hypothesis tier and the risk matrix.
//! Located high-severity signals become hotspots.

pub mod aggregation;
pub mod correlation;
pub mod engine;
pub mod hypothesis;
pub mod ranking;
pub mod regions;

pub use aggregation::{global_risk_score, martingale_metrics, trend_direction};
pub use engine::AnalysisEngine;
pub use hypothesis::{synthesize, HypothesisTier};
pub use ranking::rank_signals;
pub use regions::high_risk_regions;
