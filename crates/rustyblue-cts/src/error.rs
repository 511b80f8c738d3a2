//! Error types for the rustyblue-cts library
//!
//! This module defines the error types returned by the service and the
//! stack collaborators it talks to.

use crate::att::GattStatus;
use thiserror::Error;

/// Errors that can occur while registering or serving the time service
#[derive(Error, Debug)]
pub enum Error {
    #[error("GATT stack rejected service registration: {0}")]
    Registration(String),

    #[error("GATT stack rejected response: {0:?}")]
    ResponseRejected(GattStatus),

    #[error("Attribute value too long: {0} bytes")]
    ValueTooLong(usize),

    #[error("No attribute handles left for a table of {0} entries")]
    HandlesExhausted(usize),

    #[error("Truncated Current Time value: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("Invalid day of week: {0}")]
    InvalidDayOfWeek(u8),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
