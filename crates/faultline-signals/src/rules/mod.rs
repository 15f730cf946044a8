//! The seven built-in rule evaluators.
//!
//! Each rule reads the filtered snapshot and emits at most one signal. Rules
//! are independent of each other and of evaluation order.

pub mod alert_density;
pub mod commodity;
pub mod environmental;
pub mod infrastructure;
pub mod market;
pub mod military;
pub mod unrest;

pub use alert_density::AlertDensityRule;
pub use commodity::CommodityShockRule;
pub use environmental::EnvironmentalRule;
pub use infrastructure::InfrastructureRule;
pub use market::MarketFractureRule;
pub use military::MilitaryConvergenceRule;
pub use unrest::SocialUnrestRule;

use faultline_core::IRiskRule;

/// The built-in rules in their canonical registration order.
pub fn default_rules() -> Vec<Box<dyn IRiskRule>> {
    vec![
        Box::new(MilitaryConvergenceRule),
        Box::new(MarketFractureRule),
        Box::new(CommodityShockRule),
        Box::new(SocialUnrestRule),
        Box::new(EnvironmentalRule),
        Box::new(InfrastructureRule),
        Box::new(AlertDensityRule),
    ]
}
