//! RustyBlue CTS - Bluetooth LE Current Time Service
//!
//! This library exposes a device's wall-clock time to BLE centrals through
//! the GATT Current Time Service. It provides the service's attribute table,
//! the event handler a BLE stack drives, the binary Current Time encoding,
//! and the ATT/GATT types these are built from.

pub mod att;
pub mod cts;
pub mod error;
pub mod gatt;
pub mod time;

// Re-export common types for convenience
pub use att::{AttPermissions, GattStatus};
pub use cts::{CurrentTime, CurrentTimeConfig, CurrentTimeService, DayOfMonthEncoding};
pub use error::{Error, Result};
pub use gatt::{
    AttributeDescriptor, GattResponder, GattResponse, GattStack, GattsEvent, GattsEventHandler,
    LoopbackStack, Session, Uuid,
};
pub use time::{FixedClock, SystemClock, TimeSource};
