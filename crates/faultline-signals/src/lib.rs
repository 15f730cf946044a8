//! # faultline-signals
//!
//! Stages 1 and 2 of the pipeline: candidate sourcing narrows each snapshot
//! array to high-signal records, then seven independent rule evaluators turn
//! the filtered snapshot into zero or more typed signals.
//!
//! ## Rules
//!
//! | Rule | Type | Fires when |
//! |------|------|-----------|
//! | Military convergence | military | vessels×2 + flights×5 > 10, or > 2 prediction markets priced above 0.6 |
//! | Market fracture | economic | mean \|move\| > 1.2, > 2 sectors moving > 3%, or macro stress > 10 |
//! | Commodity shock | economic | oil > +3%, gold > +1.5%, or > 1 crypto asset moving > 10% |
//! | Social unrest | social | Martingale score of fatalities×5 > 20 |
//! | Environmental | environmental | max magnitude > 5.0 or > 10 weather alerts |
//! | Infrastructure | infrastructure | any total/major outage |
//! | Alert density | narrative | > 10 category alerts in total |

pub mod extractor;
pub mod primitives;
pub mod rules;
pub mod sanitize;
pub mod sourcing;

pub use extractor::SignalExtractor;
pub use primitives::{bayesian_update, martingale_risk};
pub use sanitize::sanitize_snapshot;
pub use sourcing::source_candidates;
