//! UTC calendar breakdown of Unix timestamps

use chrono::{DateTime, Datelike, Timelike};

/// A Unix timestamp broken down into UTC calendar fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTime {
    /// Full year, e.g. 2024
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// Hour, 0-23
    pub hour: u32,
    /// Minute, 0-59
    pub minute: u32,
    /// Second, 0-59
    pub second: u32,
    /// Day of week counted from Sunday (Sunday = 0, Saturday = 6)
    pub weekday_from_sunday: u32,
}

impl CalendarTime {
    /// Break `secs` since the epoch down in UTC. Returns `None` when the
    /// instant is outside the representable calendar range.
    pub fn from_unix(secs: i64) -> Option<Self> {
        let datetime = DateTime::from_timestamp(secs, 0)?;

        Some(Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
            weekday_from_sunday: datetime.weekday().num_days_from_sunday(),
        })
    }
}

/// Split fractional seconds into truncated whole seconds and the remainder.
///
/// Truncation is toward zero, so the remainder of a negative timestamp is
/// negative. Returns `None` for NaN and infinities.
pub fn split_seconds(now: f64) -> Option<(i64, f64)> {
    if !now.is_finite() {
        return None;
    }

    let whole = now as i64;
    Some((whole, now - whole as f64))
}
