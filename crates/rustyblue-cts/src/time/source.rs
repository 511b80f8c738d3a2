//! Time sources

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for wall-clock providers.
///
/// Implementations return the current time as fractional seconds since the
/// Unix epoch. This trait can also be implemented by a mock clock for testing.
pub trait TimeSource {
    /// Seconds since 1970-01-01T00:00:00Z
    fn now(&self) -> f64;
}

/// The host's system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> f64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs_f64(),
            Err(before) => -before.duration().as_secs_f64(),
        }
    }
}

/// A clock stopped at a fixed instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub f64);

impl TimeSource for FixedClock {
    fn now(&self) -> f64 {
        self.0
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> f64 {
        (**self).now()
    }
}
