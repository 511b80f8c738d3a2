//! Current Time Service constants

// Assigned numbers
pub const CURRENT_TIME_SERVICE_UUID: u16 = 0x1805;
pub const CURRENT_TIME_UUID: u16 = 0x2A2B;

// Current Time characteristic value length
pub const CURRENT_TIME_LEN: usize = 10;

// Position of the Current Time value in the attribute table
pub const CURRENT_TIME_VALUE_INDEX: usize = 2;

// Number of entries in the attribute table
pub const CURRENT_TIME_TABLE_LEN: usize = 3;

// Day of week values
pub const DAY_OF_WEEK_UNKNOWN: u8 = 0;
pub const DAY_OF_WEEK_MONDAY: u8 = 1;
pub const DAY_OF_WEEK_SUNDAY: u8 = 7;
