//! Reusable numeric primitives shared by the rule evaluators.

pub mod bayesian;
pub mod martingale;

pub use bayesian::bayesian_update;
pub use martingale::{martingale_risk, martingale_risk_with};
