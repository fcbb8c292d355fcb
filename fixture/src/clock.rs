//! Time sources for record timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::Timestamp;

/// Supplies the current time for record metadata.
pub trait TimeSource {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock UTC time with millisecond precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl SystemClock {
    /// Formats a UTC instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    #[must_use]
    pub fn format(instant: DateTime<Utc>) -> Timestamp {
        Timestamp::new(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        Self::format(Utc::now())
    }
}

/// Returns the same timestamp on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    #[must_use]
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(Timestamp::new(timestamp))
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Timestamp {
        self.0.clone()
    }
}
