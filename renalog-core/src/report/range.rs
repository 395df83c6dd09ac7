//! Date-range tokens and record selection.
//!
//! A range token is a short string of the form `"<N>days"` encoding a
//! lookback window. Selection keeps records whose timestamp is strictly
//! after `now - N days`; a record sitting exactly on the cutoff is
//! excluded.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ReportError;
use crate::models::{
    DialysisSession, FluidEntry, MedicationEntry, MoodEntry, VitalEntry, WeightEntry,
};

/// A parsed lookback window, e.g. `"30days"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeToken {
    days: u32,
}

impl RangeToken {
    /// Builds a token for a fixed number of days. Zero is rejected.
    pub fn days(days: u32) -> Result<Self, ReportError> {
        if days == 0 {
            return Err(ReportError::InvalidRangeToken("0days".to_string()));
        }
        Ok(Self { days })
    }

    pub fn num_days(&self) -> u32 {
        self.days
    }

    /// The instant the window starts; records must be strictly after it.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(i64::from(self.days))
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}days", self.days)
    }
}

impl FromStr for RangeToken {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_suffix("days")
            .ok_or_else(|| ReportError::InvalidRangeToken(s.to_string()))?;
        let days: u32 = digits
            .parse()
            .map_err(|_| ReportError::InvalidRangeToken(s.to_string()))?;
        RangeToken::days(days).map_err(|_| ReportError::InvalidRangeToken(s.to_string()))
    }
}

impl Serialize for RangeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RangeToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Anything with a single observation timestamp.
pub trait Timestamped {
    fn recorded_at(&self) -> DateTime<Utc>;
}

macro_rules! impl_timestamped {
    ($($ty:ty),+ $(,)?) => {
        $(impl Timestamped for $ty {
            fn recorded_at(&self) -> DateTime<Utc> {
                self.recorded_at
            }
        })+
    };
}

impl_timestamped!(
    DialysisSession,
    WeightEntry,
    FluidEntry,
    VitalEntry,
    MedicationEntry,
    MoodEntry,
);

/// Records inside the window, newest state untouched (clones the subset).
pub fn select_recent<T: Timestamped + Clone>(
    records: &[T],
    now: DateTime<Utc>,
    range: RangeToken,
) -> Vec<T> {
    let cutoff = range.cutoff(now);
    records
        .iter()
        .filter(|r| r.recorded_at() > cutoff)
        .cloned()
        .collect()
}

/// Count-only variant of [`select_recent`] for report previews.
pub fn count_recent<T: Timestamped>(records: &[T], now: DateTime<Utc>, range: RangeToken) -> usize {
    let cutoff = range.cutoff(now);
    records.iter().filter(|r| r.recorded_at() > cutoff).count()
}
