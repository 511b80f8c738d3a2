//! Current Time Service (CTS)
//!
//! This module exposes the device's wall-clock time through the Bluetooth
//! SIG Current Time Service. Only the Current Time characteristic is
//! implemented, and only for reads.

pub mod config;
pub mod constants;
pub mod record;
pub mod service;
pub mod table;

#[cfg(test)]
mod tests;

pub use config::{CurrentTimeConfig, DayOfMonthEncoding};
pub use constants::*;
pub use record::{AdjustReason, CurrentTime, DayOfWeek};
pub use service::{init, CurrentTimeService};
pub use table::CURRENT_TIME_SERVICE_TABLE;
