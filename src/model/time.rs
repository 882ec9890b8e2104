//! Time primitives.
//!
//! Timestamp: backend nanosecond timestamps (ordering + elapsed time).
//! WallClock: caller-supplied "now" in milliseconds, so every derived
//! computation stays a pure function of its inputs.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Backend timestamp - nanoseconds since the Unix epoch.
///
/// u64 holds ~580 years of nanoseconds; no overflow concern in this domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    pub fn as_nanos(self) -> u64 {
        self.0
    }

    /// Milliseconds since the Unix epoch (nanoseconds / 1_000_000).
    pub fn as_millis(self) -> u64 {
        self.0 / 1_000_000
    }

    /// Elapsed wall-clock time against a caller-supplied now, in ms.
    ///
    /// Signed: a timestamp ahead of `now` yields a negative duration
    /// rather than wrapping.
    pub fn elapsed_ms(self, now: WallClock) -> i64 {
        now.0 as i64 - self.as_millis() as i64
    }

    /// UTC calendar day containing this timestamp.
    ///
    /// Used by the date-range filter, which compares day boundaries and
    /// discards time-of-day.
    pub fn utc_date(self) -> Date {
        OffsetDateTime::from_unix_timestamp_nanos(self.0 as i128)
            .map(|dt| dt.date())
            .unwrap_or(Date::MIN)
    }
}

/// Wall clock in milliseconds - the "now" input to elapsed-time math.
///
/// Copy is fine here - it's just a measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallClock(pub u64);

impl WallClock {
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        Self(ms)
    }
}
