//! Current Time characteristic value
//!
//! The value is ten packed little-endian bytes:
//!
//! | offset | field          | type |
//! |--------|----------------|------|
//! | 0      | year           | u16  |
//! | 2      | month          | u8   |
//! | 3      | day            | u8   |
//! | 4      | hours          | u8   |
//! | 5      | minutes        | u8   |
//! | 6      | seconds        | u8   |
//! | 7      | day of week    | u8   |
//! | 8      | fractions256   | u8   |
//! | 9      | adjust reason  | u8   |

use super::config::DayOfMonthEncoding;
use super::constants::*;
use crate::error::{Error, Result};
use crate::time::calendar::{split_seconds, CalendarTime};
use bitflags::bitflags;
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Day of week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DayOfWeek {
    Unknown = DAY_OF_WEEK_UNKNOWN,
    Monday = DAY_OF_WEEK_MONDAY,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = DAY_OF_WEEK_SUNDAY,
}

impl DayOfWeek {
    /// Map a weekday counted from Sunday (Sunday = 0) to the wire convention
    /// (Monday = 1 .. Sunday = 7)
    pub fn from_days_from_sunday(days: u32) -> Option<Self> {
        match days {
            0 => Some(DayOfWeek::Sunday),
            1 => Some(DayOfWeek::Monday),
            2 => Some(DayOfWeek::Tuesday),
            3 => Some(DayOfWeek::Wednesday),
            4 => Some(DayOfWeek::Thursday),
            5 => Some(DayOfWeek::Friday),
            6 => Some(DayOfWeek::Saturday),
            _ => None,
        }
    }

    /// Wire value
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            DAY_OF_WEEK_UNKNOWN => Ok(DayOfWeek::Unknown),
            DAY_OF_WEEK_SUNDAY => Ok(DayOfWeek::Sunday),
            // Monday through Saturday share numbering with the Sunday-based count
            1..=6 => DayOfWeek::from_days_from_sunday(value as u32)
                .ok_or(Error::InvalidDayOfWeek(value)),
            _ => Err(Error::InvalidDayOfWeek(value)),
        }
    }
}

bitflags! {
    /// Why the time was last adjusted
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AdjustReason: u8 {
        const MANUAL_TIME_UPDATE = 0x01;
        const EXTERNAL_REFERENCE_TIME_UPDATE = 0x02;
        const CHANGE_OF_TIME_ZONE = 0x04;
        const CHANGE_OF_DST = 0x08;
    }
}

/// Decoded Current Time characteristic value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub day_of_week: DayOfWeek,
    /// Fraction of the second in 1/256 units
    pub fractions256: u8,
    pub adjust_reason: AdjustReason,
}

impl CurrentTime {
    /// Build the value for `now` seconds since the epoch, in UTC.
    ///
    /// Returns `None` if `now` is not finite, cannot be broken down into a
    /// calendar date, or its year does not fit the 16-bit year field.
    pub fn from_timestamp(now: f64, day_of_month: DayOfMonthEncoding) -> Option<Self> {
        let (secs, fraction) = split_seconds(now)?;
        let calendar = CalendarTime::from_unix(secs)?;
        let year = u16::try_from(calendar.year).ok()?;
        let day_of_week = DayOfWeek::from_days_from_sunday(calendar.weekday_from_sunday)?;

        Some(Self {
            year,
            month: calendar.month as u8,
            day: day_of_month.encode(calendar.day),
            hours: calendar.hour as u8,
            minutes: calendar.minute as u8,
            seconds: calendar.second as u8,
            day_of_week,
            fractions256: fractions256(fraction),
            adjust_reason: AdjustReason::empty(),
        })
    }

    /// Serialize to the packed wire layout
    pub fn to_bytes(&self) -> [u8; CURRENT_TIME_LEN] {
        let mut buf = [0u8; CURRENT_TIME_LEN];
        LittleEndian::write_u16(&mut buf[0..2], self.year);
        buf[2] = self.month;
        buf[3] = self.day;
        buf[4] = self.hours;
        buf[5] = self.minutes;
        buf[6] = self.seconds;
        buf[7] = self.day_of_week.value();
        buf[8] = self.fractions256;
        buf[9] = self.adjust_reason.bits();
        buf
    }

    /// Parse a packed value. Trailing bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < CURRENT_TIME_LEN {
            return Err(Error::Truncated {
                expected: CURRENT_TIME_LEN,
                actual: data.len(),
            });
        }

        let mut cursor = Cursor::new(data);
        let year = cursor.read_u16::<LittleEndian>()?;
        let month = cursor.read_u8()?;
        let day = cursor.read_u8()?;
        let hours = cursor.read_u8()?;
        let minutes = cursor.read_u8()?;
        let seconds = cursor.read_u8()?;
        let day_of_week = DayOfWeek::try_from(cursor.read_u8()?)?;
        let fractions256 = cursor.read_u8()?;
        let adjust_reason = AdjustReason::from_bits_retain(cursor.read_u8()?);

        Ok(Self {
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
            day_of_week,
            fractions256,
            adjust_reason,
        })
    }
}

/// Scale a fractional second into 1/256 units, truncating.
///
/// Values outside `[0, 1)` saturate to the `u8` range.
pub fn fractions256(fraction: f64) -> u8 {
    (fraction / (1.0 / 256.0)) as u8
}
