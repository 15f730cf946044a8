//! Injectable time sources.

use chrono::{DateTime, Utc};

use crate::traits::IClock;

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl IClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant. Used for reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl IClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
