//! Current Time Service attribute table

use super::constants::*;
use crate::att::{AttPermissions, CHARACTERISTIC_UUID, PRIMARY_SERVICE_UUID, UUID_LEN_128};
use crate::gatt::{AttributeDescriptor, CharacteristicProperties, Uuid};

static SERVICE_UUID_VALUE: [u8; 2] = CURRENT_TIME_SERVICE_UUID.to_le_bytes();
static CHAR_PROP_READ: [u8; 1] = [CharacteristicProperties::READ.bits()];

/// Service declaration, Current Time declaration and Current Time value.
///
/// The declarations are answered by the stack. The value entry is an empty
/// placeholder: reads of it are forwarded to the service handler.
pub static CURRENT_TIME_SERVICE_TABLE: [AttributeDescriptor; CURRENT_TIME_TABLE_LEN] = [
    AttributeDescriptor::auto(
        Uuid::from_u16(PRIMARY_SERVICE_UUID),
        AttPermissions::read_only(),
        UUID_LEN_128,
        &SERVICE_UUID_VALUE,
    ),
    // Current Time
    AttributeDescriptor::auto(
        Uuid::from_u16(CHARACTERISTIC_UUID),
        AttPermissions::read_only(),
        1,
        &CHAR_PROP_READ,
    ),
    AttributeDescriptor::by_app(Uuid::from_u16(CURRENT_TIME_UUID), AttPermissions::read_only()),
];
