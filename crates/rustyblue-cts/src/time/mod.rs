//! Wall-clock access
//!
//! This module provides the time sources the service reads and the UTC
//! calendar breakdown of their values.

pub mod calendar;
pub mod source;

pub use calendar::CalendarTime;
pub use source::{FixedClock, SystemClock, TimeSource};
