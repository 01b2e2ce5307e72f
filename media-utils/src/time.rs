use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::UtilError;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const YEAR: u64 = 365 * DAY;

/// A coarse, single-unit rendering of an elapsed number of seconds.
///
/// Values are always floored to the unit, e.g. `265` seconds renders as
/// `4 mns`. Below one minute the raw seconds are shown with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HumanDuration(u64);

impl HumanDuration {
    pub fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    pub fn seconds(&self) -> u64 {
        self.0
    }
}

impl From<u64> for HumanDuration {
    fn from(seconds: u64) -> Self {
        Self(seconds)
    }
}

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;

        if s < MINUTE {
            write!(f, "{:.2} secs", s as f64)
        } else if s < HOUR {
            write!(f, "{} mns", s / MINUTE)
        } else if s < DAY {
            write!(f, "{} hours", s / HOUR)
        } else if s < YEAR {
            write!(f, "{} days", s / DAY)
        } else {
            write!(f, "{} years", s / YEAR)
        }
    }
}

pub fn format_duration(seconds: u64) -> String {
    HumanDuration::new(seconds).to_string()
}

/// Signed entry point; negative durations are rejected instead of formatted.
pub fn try_format_duration(seconds: i64) -> Result<String, UtilError> {
    u64::try_from(seconds)
        .map(format_duration)
        .map_err(|_| UtilError::NegativeDuration(seconds))
}

pub fn format_elapsed(duration: chrono::Duration) -> Result<String, UtilError> {
    // num_seconds truncates toward zero, so -500ms would otherwise pass as 0
    if duration < chrono::Duration::zero() {
        return Err(UtilError::NegativeDuration(duration.num_seconds().min(-1)));
    }
    try_format_duration(duration.num_seconds())
}

/// `{unix_secs}.{subsec_nanos}` for the given instant, used as hash seed.
pub fn nanos_stamp(at: DateTime<Utc>) -> String {
    format!("{}.{:09}", at.timestamp(), at.timestamp_subsec_nanos())
}
