use chrono::{DateTime, Utc};

/// Source of "now" for an analysis run.
pub trait IClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
