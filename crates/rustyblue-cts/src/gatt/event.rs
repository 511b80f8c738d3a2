//! GATT server events delivered by the stack to service handlers

use super::types::Uuid;
use crate::att::GattStatus;

/// GATT interface number the stack assigned to a registration
pub type GattIf = u8;

/// Connection identifier
pub type ConnId = u16;

/// Stack-side context an event is delivered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Interface the owning service is registered on
    pub gatt_if: GattIf,
    /// Connection the event belongs to, if any
    pub conn_id: Option<ConnId>,
}

/// Payload of the attribute table created event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTableCreated {
    /// Instantiation status
    pub status: GattStatus,
    /// UUID of the service the table declares
    pub service_uuid: Uuid,
    /// One handle per table entry, in table order
    pub handles: Vec<u16>,
}

/// Payload of a read request the stack forwards to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    /// Connection the request arrived on
    pub conn_id: ConnId,
    /// Transaction id to echo in the response
    pub trans_id: u32,
    /// Address of the remote device
    pub address: [u8; 6],
    /// Attribute being read
    pub handle: u16,
    /// Offset of a blob read
    pub offset: u16,
    /// Whether this is part of a long read
    pub is_long: bool,
    /// Whether the stack expects a response
    pub need_rsp: bool,
}

/// Kinds of event a GATT server may receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GattsEventKind {
    Register,
    Read,
    Write,
    ExecWrite,
    Mtu,
    Confirm,
    Unregister,
    CreateService,
    StartService,
    StopService,
    Connect,
    Disconnect,
    Congest,
    ResponseSent,
    CreateAttributeTable,
}

/// An event delivered to a service's handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GattsEvent {
    /// The stack instantiated the service's attribute table
    AttributeTableCreated(AttributeTableCreated),
    /// A central read an application-respond attribute
    Read(ReadRequest),
    /// Anything the time service has no use for
    Other(GattsEventKind),
}

impl GattsEvent {
    /// The kind tag of this event
    pub fn kind(&self) -> GattsEventKind {
        match self {
            GattsEvent::AttributeTableCreated(_) => GattsEventKind::CreateAttributeTable,
            GattsEvent::Read(_) => GattsEventKind::Read,
            GattsEvent::Other(kind) => *kind,
        }
    }
}
