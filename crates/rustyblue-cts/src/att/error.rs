//! Status codes carried in ATT responses
use super::constants::*;

/// Status of a GATT response, as defined in the Bluetooth specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GattStatus {
    /// Request served
    Ok,
    /// Invalid handle
    InvalidHandle,
    /// Read not permitted
    ReadNotPermitted,
    /// Write not permitted
    WriteNotPermitted,
    /// Invalid PDU
    InvalidPdu,
    /// Insufficient authentication
    InsufficientAuthentication,
    /// Request not supported
    RequestNotSupported,
    /// Invalid offset
    InvalidOffset,
    /// Insufficient authorization
    InsufficientAuthorization,
    /// Prepare queue full
    PrepareQueueFull,
    /// Attribute not found
    AttributeNotFound,
    /// Attribute not long
    AttributeNotLong,
    /// Insufficient encryption key size
    InsufficientEncryptionKeySize,
    /// Invalid attribute value length
    InvalidAttributeValueLength,
    /// Unlikely error
    Unlikely,
    /// Insufficient encryption
    InsufficientEncryption,
    /// Unsupported group type
    UnsupportedGroupType,
    /// Insufficient resources
    InsufficientResources,
    /// Application error
    ApplicationError(u8),
    /// Unknown status code
    Unknown(u8),
}

impl GattStatus {
    /// Whether this status reports success
    pub fn is_ok(&self) -> bool {
        matches!(self, GattStatus::Ok)
    }
}

impl From<u8> for GattStatus {
    fn from(code: u8) -> Self {
        match code {
            ATT_SUCCESS => GattStatus::Ok,
            ATT_ERROR_INVALID_HANDLE => GattStatus::InvalidHandle,
            ATT_ERROR_READ_NOT_PERMITTED => GattStatus::ReadNotPermitted,
            ATT_ERROR_WRITE_NOT_PERMITTED => GattStatus::WriteNotPermitted,
            ATT_ERROR_INVALID_PDU => GattStatus::InvalidPdu,
            ATT_ERROR_INSUFFICIENT_AUTHENTICATION => GattStatus::InsufficientAuthentication,
            ATT_ERROR_REQUEST_NOT_SUPPORTED => GattStatus::RequestNotSupported,
            ATT_ERROR_INVALID_OFFSET => GattStatus::InvalidOffset,
            ATT_ERROR_INSUFFICIENT_AUTHORIZATION => GattStatus::InsufficientAuthorization,
            ATT_ERROR_PREPARE_QUEUE_FULL => GattStatus::PrepareQueueFull,
            ATT_ERROR_ATTRIBUTE_NOT_FOUND => GattStatus::AttributeNotFound,
            ATT_ERROR_ATTRIBUTE_NOT_LONG => GattStatus::AttributeNotLong,
            ATT_ERROR_INSUFFICIENT_ENCRYPTION_KEY_SIZE => {
                GattStatus::InsufficientEncryptionKeySize
            }
            ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH => GattStatus::InvalidAttributeValueLength,
            ATT_ERROR_UNLIKELY => GattStatus::Unlikely,
            ATT_ERROR_INSUFFICIENT_ENCRYPTION => GattStatus::InsufficientEncryption,
            ATT_ERROR_UNSUPPORTED_GROUP_TYPE => GattStatus::UnsupportedGroupType,
            ATT_ERROR_INSUFFICIENT_RESOURCES => GattStatus::InsufficientResources,
            c if (ATT_ERROR_APPLICATION_ERROR_START..=ATT_ERROR_APPLICATION_ERROR_END)
                .contains(&c) =>
            {
                GattStatus::ApplicationError(c)
            }
            _ => GattStatus::Unknown(code),
        }
    }
}

impl From<GattStatus> for u8 {
    fn from(status: GattStatus) -> u8 {
        match status {
            GattStatus::Ok => ATT_SUCCESS,
            GattStatus::InvalidHandle => ATT_ERROR_INVALID_HANDLE,
            GattStatus::ReadNotPermitted => ATT_ERROR_READ_NOT_PERMITTED,
            GattStatus::WriteNotPermitted => ATT_ERROR_WRITE_NOT_PERMITTED,
            GattStatus::InvalidPdu => ATT_ERROR_INVALID_PDU,
            GattStatus::InsufficientAuthentication => ATT_ERROR_INSUFFICIENT_AUTHENTICATION,
            GattStatus::RequestNotSupported => ATT_ERROR_REQUEST_NOT_SUPPORTED,
            GattStatus::InvalidOffset => ATT_ERROR_INVALID_OFFSET,
            GattStatus::InsufficientAuthorization => ATT_ERROR_INSUFFICIENT_AUTHORIZATION,
            GattStatus::PrepareQueueFull => ATT_ERROR_PREPARE_QUEUE_FULL,
            GattStatus::AttributeNotFound => ATT_ERROR_ATTRIBUTE_NOT_FOUND,
            GattStatus::AttributeNotLong => ATT_ERROR_ATTRIBUTE_NOT_LONG,
            GattStatus::InsufficientEncryptionKeySize => {
                ATT_ERROR_INSUFFICIENT_ENCRYPTION_KEY_SIZE
            }
            GattStatus::InvalidAttributeValueLength => ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH,
            GattStatus::Unlikely => ATT_ERROR_UNLIKELY,
            GattStatus::InsufficientEncryption => ATT_ERROR_INSUFFICIENT_ENCRYPTION,
            GattStatus::UnsupportedGroupType => ATT_ERROR_UNSUPPORTED_GROUP_TYPE,
            GattStatus::InsufficientResources => ATT_ERROR_INSUFFICIENT_RESOURCES,
            GattStatus::ApplicationError(code) => code,
            GattStatus::Unknown(code) => code,
        }
    }
}
