//! Attribute Protocol (ATT) definitions
//!
//! This module provides the ATT constants, permissions and status codes the
//! GATT layer builds on.

pub mod constants;
pub mod error;
pub mod types;

// Re-export the public API
pub use self::constants::*;
pub use self::error::GattStatus;
pub use self::types::AttPermissions;
