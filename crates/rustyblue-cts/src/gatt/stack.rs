//! Seams between a GATT service and the BLE stack that hosts it

use super::event::{ConnId, GattIf, GattsEvent, Session};
use super::table::AttributeDescriptor;
use crate::att::{GattStatus, ATT_MAX_ATTR_LEN};
use crate::error::{Error, Result};

/// Attribute value sent back for an application-respond read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattResponse {
    /// Attribute the value belongs to
    pub handle: u16,
    /// Offset the value starts at
    pub offset: u16,
    value: Vec<u8>,
}

impl GattResponse {
    /// Build a response, rejecting values no ATT PDU can carry
    pub fn new(handle: u16, offset: u16, value: &[u8]) -> Result<Self> {
        if value.len() > ATT_MAX_ATTR_LEN {
            return Err(Error::ValueTooLong(value.len()));
        }

        Ok(Self {
            handle,
            offset,
            value: value.to_vec(),
        })
    }

    /// The response value
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Length of the response value
    pub fn len(&self) -> u16 {
        self.value.len() as u16
    }

    /// Whether the response carries no bytes
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Stack primitive that transmits responses to read requests
pub trait GattResponder {
    /// Send a response for transaction `trans_id` on `conn_id`
    fn send_response(
        &mut self,
        gatt_if: GattIf,
        conn_id: ConnId,
        trans_id: u32,
        status: GattStatus,
        response: &GattResponse,
    ) -> Result<()>;
}

/// Callback the stack drives for every event of a registered service
pub trait GattsEventHandler {
    /// Handle one event. Returns `true` if the event was consumed.
    fn handle_event(
        &mut self,
        session: &Session,
        event: &GattsEvent,
        responder: &mut dyn GattResponder,
    ) -> bool;
}

/// A BLE stack that can host attribute tables
pub trait GattStack {
    /// Register `table` and route its events to `handler`.
    ///
    /// The stack instantiates the table and later reports the assigned
    /// handles through [`GattsEvent::AttributeTableCreated`].
    fn register_service(
        &mut self,
        table: &'static [AttributeDescriptor],
        handler: Box<dyn GattsEventHandler>,
    ) -> Result<()>;
}
