//! Type definitions for the ATT protocol
use super::constants::*;

/// ATT Permission flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttPermissions {
    /// Raw permissions value
    raw_value: u16,
}

impl AttPermissions {
    /// Create new permissions with the given raw value
    pub const fn new(raw_value: u16) -> Self {
        Self { raw_value }
    }

    /// Create empty permissions (no access)
    pub const fn none() -> Self {
        Self { raw_value: ATT_PERM_NONE }
    }

    /// Create read-only permissions
    pub const fn read_only() -> Self {
        Self { raw_value: ATT_PERM_READ }
    }

    /// Create read-write permissions
    pub const fn read_write() -> Self {
        Self { raw_value: ATT_PERM_READ | ATT_PERM_WRITE }
    }

    /// Create encrypted read-only permissions
    pub const fn read_encrypted() -> Self {
        Self { raw_value: ATT_PERM_READ | ATT_PERM_READ_ENCRYPTED }
    }

    /// Get the raw permissions value
    pub const fn value(&self) -> u16 {
        self.raw_value
    }

    /// Check if read is permitted
    pub const fn can_read(&self) -> bool {
        (self.raw_value & ATT_PERM_READ) != 0
    }

    /// Check if write is permitted
    pub const fn can_write(&self) -> bool {
        (self.raw_value & ATT_PERM_WRITE) != 0
    }

    /// Check if read requires an encrypted link
    pub const fn read_requires_encryption(&self) -> bool {
        (self.raw_value & ATT_PERM_READ_ENCRYPTED) != 0
    }
}

impl Default for AttPermissions {
    fn default() -> Self {
        Self::none()
    }
}
