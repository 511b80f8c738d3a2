//! Declarative attribute tables
//!
//! A service hands the stack a fixed slice of [`AttributeDescriptor`]s. The
//! stack assigns one handle per entry, in order, when it instantiates the
//! table and reports the handles back through
//! [`GattsEvent::AttributeTableCreated`](super::event::GattsEvent).

use super::types::Uuid;
use crate::att::AttPermissions;

/// Who answers reads of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeControl {
    /// The stack answers from the descriptor's constant value
    AutoRespond,
    /// The stack forwards the request to the service's event handler
    RespondByApp,
}

/// One entry of an attribute table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Response mode
    pub control: AttributeControl,
    /// Attribute type
    pub uuid: Uuid,
    /// Attribute permissions
    pub permissions: AttPermissions,
    /// Declared maximum value length
    pub max_length: u16,
    /// Declared current value length
    pub length: u16,
    /// Constant value, if the stack owns it
    pub value: Option<&'static [u8]>,
}

impl AttributeDescriptor {
    /// Descriptor whose constant value is served by the stack
    pub const fn auto(
        uuid: Uuid,
        permissions: AttPermissions,
        max_length: u16,
        value: &'static [u8],
    ) -> Self {
        Self {
            control: AttributeControl::AutoRespond,
            uuid,
            permissions,
            max_length,
            length: value.len() as u16,
            value: Some(value),
        }
    }

    /// Empty placeholder whose value the application supplies on each read
    pub const fn by_app(uuid: Uuid, permissions: AttPermissions) -> Self {
        Self {
            control: AttributeControl::RespondByApp,
            uuid,
            permissions,
            max_length: 0,
            length: 0,
            value: None,
        }
    }

    /// Whether the stack answers reads of this attribute itself
    pub fn is_auto_respond(&self) -> bool {
        self.control == AttributeControl::AutoRespond
    }

    /// The constant value, truncated to the declared length
    pub fn constant_value(&self) -> Option<&'static [u8]> {
        self.value
            .map(|value| &value[..value.len().min(self.length as usize)])
    }
}
