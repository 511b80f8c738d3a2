//! In-memory GATT stack
//!
//! `LoopbackStack` hosts attribute tables without a controller. It assigns
//! handles the way a real stack does, answers auto-respond attributes itself
//! and forwards everything else to the owning service's handler. Centrals are
//! simulated with [`LoopbackStack::connect`] and [`LoopbackStack::read`].

use super::event::{
    AttributeTableCreated, ConnId, GattIf, GattsEvent, GattsEventKind, ReadRequest, Session,
};
use super::stack::{GattResponder, GattResponse, GattStack, GattsEventHandler};
use super::table::AttributeDescriptor;
use crate::att::{GattStatus, ATT_HANDLE_MAX, ATT_HANDLE_MIN, PRIMARY_SERVICE_UUID};
use crate::error::{Error, Result};
use crate::gatt::Uuid;
use log::{debug, trace};
use std::collections::BTreeMap;

/// A response a handler pushed through the stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentResponse {
    pub gatt_if: GattIf,
    pub conn_id: ConnId,
    pub trans_id: u32,
    pub status: GattStatus,
    pub response: GattResponse,
}

/// Responder that records everything it is asked to send
#[derive(Debug, Default)]
pub struct ResponseLog {
    responses: Vec<SentResponse>,
}

impl ResponseLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// All responses sent so far, oldest first
    pub fn responses(&self) -> &[SentResponse] {
        &self.responses
    }

    /// Take every logged response, leaving the log empty
    pub fn drain(&mut self) -> Vec<SentResponse> {
        std::mem::take(&mut self.responses)
    }

    /// Forget every logged response
    pub fn clear(&mut self) {
        self.responses.clear();
    }

    /// Most recent response for a transaction
    pub fn find(&self, trans_id: u32) -> Option<&SentResponse> {
        self.responses.iter().rev().find(|sent| sent.trans_id == trans_id)
    }
}

impl GattResponder for ResponseLog {
    fn send_response(
        &mut self,
        gatt_if: GattIf,
        conn_id: ConnId,
        trans_id: u32,
        status: GattStatus,
        response: &GattResponse,
    ) -> Result<()> {
        self.responses.push(SentResponse {
            gatt_if,
            conn_id,
            trans_id,
            status,
            response: response.clone(),
        });
        Ok(())
    }
}

/// What a central observes after a read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Attribute value
    Value(Vec<u8>),
    /// Error response
    Error(GattStatus),
    /// Nobody answered; a real central would time out
    NoResponse,
    /// The connection id is unknown
    NotConnected,
}

struct AttributeEntry {
    gatt_if: GattIf,
    descriptor: &'static AttributeDescriptor,
}

struct Registration {
    gatt_if: GattIf,
    handler: Box<dyn GattsEventHandler>,
}

/// In-memory GATT stack with a single-threaded event loop
pub struct LoopbackStack {
    /// Instantiated attributes by handle
    attributes: BTreeMap<u16, AttributeEntry>,
    /// Registered services
    registrations: Vec<Registration>,
    /// Open connections and their peer addresses
    connections: BTreeMap<ConnId, [u8; 6]>,
    /// Responses sent by handlers
    outbox: ResponseLog,
    next_handle: u32,
    next_gatt_if: GattIf,
    next_conn_id: ConnId,
    next_trans_id: u32,
}

impl LoopbackStack {
    /// Create a stack with no services
    pub fn new() -> Self {
        Self {
            attributes: BTreeMap::new(),
            registrations: Vec::new(),
            connections: BTreeMap::new(),
            outbox: ResponseLog::new(),
            next_handle: ATT_HANDLE_MIN as u32,
            next_gatt_if: 1,
            next_conn_id: 0,
            next_trans_id: 1,
        }
    }

    /// Number of registered services
    pub fn service_count(&self) -> usize {
        self.registrations.len()
    }

    /// Number of instantiated attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Handles of all primary service declarations
    pub fn service_handles(&self) -> Vec<u16> {
        self.attributes
            .iter()
            .filter(|(_, entry)| entry.descriptor.uuid == Uuid::from_u16(PRIMARY_SERVICE_UUID))
            .map(|(handle, _)| *handle)
            .collect()
    }

    /// Descriptor instantiated at `handle`
    pub fn descriptor(&self, handle: u16) -> Option<&'static AttributeDescriptor> {
        self.attributes.get(&handle).map(|entry| entry.descriptor)
    }

    /// Responses handlers sent so far
    pub fn responses(&self) -> &[SentResponse] {
        self.outbox.responses()
    }

    /// Take the responses logged so far; later reads start a fresh log
    pub fn drain_responses(&mut self) -> Vec<SentResponse> {
        self.outbox.drain()
    }

    /// Simulate a central connecting
    pub fn connect(&mut self, address: [u8; 6]) -> ConnId {
        let conn_id = self.next_conn_id;
        self.next_conn_id = self.next_conn_id.wrapping_add(1);
        self.connections.insert(conn_id, address);
        debug!("Loopback connection {} from {:02x?}", conn_id, address);

        self.broadcast(Some(conn_id), GattsEvent::Other(GattsEventKind::Connect));
        conn_id
    }

    /// Simulate a central disconnecting. Returns `false` for unknown ids.
    pub fn disconnect(&mut self, conn_id: ConnId) -> bool {
        if self.connections.remove(&conn_id).is_none() {
            return false;
        }

        self.broadcast(Some(conn_id), GattsEvent::Other(GattsEventKind::Disconnect));
        true
    }

    /// Simulate a central reading `handle` at `offset`
    pub fn read(&mut self, conn_id: ConnId, handle: u16, offset: u16) -> ReadOutcome {
        let address = match self.connections.get(&conn_id) {
            Some(address) => *address,
            None => return ReadOutcome::NotConnected,
        };

        let (gatt_if, descriptor) = match self.attributes.get(&handle) {
            Some(entry) => (entry.gatt_if, entry.descriptor),
            None => return ReadOutcome::Error(GattStatus::InvalidHandle),
        };

        if !descriptor.permissions.can_read() {
            return ReadOutcome::Error(GattStatus::ReadNotPermitted);
        }

        if descriptor.is_auto_respond() {
            let value = descriptor.constant_value().unwrap_or(&[]);
            let offset = offset as usize;
            if offset > value.len() {
                return ReadOutcome::Error(GattStatus::InvalidOffset);
            }
            trace!("Auto-responding to read of handle {}", handle);
            return ReadOutcome::Value(value[offset..].to_vec());
        }

        let trans_id = self.next_trans_id;
        self.next_trans_id = self.next_trans_id.wrapping_add(1);

        let session = Session {
            gatt_if,
            conn_id: Some(conn_id),
        };
        let event = GattsEvent::Read(ReadRequest {
            conn_id,
            trans_id,
            address,
            handle,
            offset,
            is_long: offset != 0,
            need_rsp: true,
        });

        if let Some(registration) = self
            .registrations
            .iter_mut()
            .find(|registration| registration.gatt_if == gatt_if)
        {
            registration
                .handler
                .handle_event(&session, &event, &mut self.outbox);
        }

        match self.outbox.find(trans_id) {
            Some(sent) if sent.status.is_ok() => ReadOutcome::Value(sent.response.value().to_vec()),
            Some(sent) => ReadOutcome::Error(sent.status),
            None => ReadOutcome::NoResponse,
        }
    }

    fn broadcast(&mut self, conn_id: Option<ConnId>, event: GattsEvent) {
        for registration in self.registrations.iter_mut() {
            let session = Session {
                gatt_if: registration.gatt_if,
                conn_id,
            };
            registration
                .handler
                .handle_event(&session, &event, &mut self.outbox);
        }
    }
}

impl Default for LoopbackStack {
    fn default() -> Self {
        Self::new()
    }
}

impl GattStack for LoopbackStack {
    fn register_service(
        &mut self,
        table: &'static [AttributeDescriptor],
        mut handler: Box<dyn GattsEventHandler>,
    ) -> Result<()> {
        let last_handle = self.next_handle + table.len() as u32;
        if table.is_empty() || last_handle - 1 > ATT_HANDLE_MAX as u32 {
            return Err(Error::HandlesExhausted(table.len()));
        }

        let gatt_if = self.next_gatt_if;
        self.next_gatt_if = self.next_gatt_if.wrapping_add(1);

        let mut handles = Vec::with_capacity(table.len());
        for descriptor in table {
            let handle = self.next_handle as u16;
            self.next_handle += 1;
            self.attributes.insert(handle, AttributeEntry { gatt_if, descriptor });
            handles.push(handle);
        }
        debug!(
            "Instantiated {} attributes at handles {}..={} for interface {}",
            table.len(),
            handles[0],
            handles[handles.len() - 1],
            gatt_if
        );

        let service_uuid = table[0]
            .constant_value()
            .and_then(Uuid::from_bytes)
            .unwrap_or(table[0].uuid);

        let session = Session {
            gatt_if,
            conn_id: None,
        };
        handler.handle_event(
            &session,
            &GattsEvent::Other(GattsEventKind::Register),
            &mut self.outbox,
        );
        handler.handle_event(
            &session,
            &GattsEvent::AttributeTableCreated(AttributeTableCreated {
                status: GattStatus::Ok,
                service_uuid,
                handles,
            }),
            &mut self.outbox,
        );

        self.registrations.push(Registration { gatt_if, handler });
        Ok(())
    }
}
