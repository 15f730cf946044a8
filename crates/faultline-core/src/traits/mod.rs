pub mod clock;
pub mod risk_rule;

pub use clock::IClock;
pub use risk_rule::{IRiskRule, RuleContext};
