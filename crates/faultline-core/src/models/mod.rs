//! Output models produced by the narrative and assessment stages.

pub mod analysis;
pub mod hypothesis;
pub mod narrative;
pub mod region;

pub use analysis::{Analysis, CorrelationMatrix, MartingaleMetrics, TrendDirection};
pub use hypothesis::{Hypothesis, RiskMatrix};
pub use narrative::RiskNarrative;
pub use region::HighRiskRegion;
