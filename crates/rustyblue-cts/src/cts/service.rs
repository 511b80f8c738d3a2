//! Current Time Service event handling

use super::config::{CurrentTimeConfig, DayOfMonthEncoding};
use super::constants::*;
use super::record::CurrentTime;
use super::table::CURRENT_TIME_SERVICE_TABLE;
use crate::att::GattStatus;
use crate::error::Result;
use crate::gatt::{
    AttributeDescriptor, AttributeTableCreated, GattResponder, GattResponse, GattStack,
    GattsEvent, GattsEventHandler, ReadRequest, Session, Uuid,
};
use crate::time::TimeSource;
use log::{debug, info, trace, warn};

/// One instance of the Current Time Service.
///
/// The instance starts unbound. It learns the handle of its Current Time
/// value from the stack's table-created event and from then on answers reads
/// of that handle with the time reported by its clock.
#[derive(Debug)]
pub struct CurrentTimeService<C> {
    clock: C,
    day_of_month: DayOfMonthEncoding,
    value_handle: Option<u16>,
}

impl<C: TimeSource> CurrentTimeService<C> {
    /// Create an unbound service reading time from `clock`
    pub fn new(clock: C, config: &CurrentTimeConfig) -> Self {
        Self {
            clock,
            day_of_month: config.day_of_month,
            value_handle: None,
        }
    }

    /// The attribute table to register for this service
    pub fn table() -> &'static [AttributeDescriptor] {
        &CURRENT_TIME_SERVICE_TABLE
    }

    /// Handle of the Current Time value, once the stack has assigned it
    pub fn value_handle(&self) -> Option<u16> {
        self.value_handle
    }

    /// Whether the table-created event has been seen
    pub fn is_bound(&self) -> bool {
        self.value_handle.is_some()
    }

    /// The value a read would return right now
    pub fn current_time(&self) -> Option<CurrentTime> {
        CurrentTime::from_timestamp(self.clock.now(), self.day_of_month)
    }

    fn on_table_created(&mut self, created: &AttributeTableCreated) {
        if created.service_uuid != Uuid::from_u16(CURRENT_TIME_SERVICE_UUID) {
            trace!("Ignoring attribute table for service {}", created.service_uuid);
            return;
        }

        if !created.status.is_ok() {
            warn!("Current Time attribute table creation failed: {:?}", created.status);
            return;
        }

        let handle = match created.handles.get(CURRENT_TIME_VALUE_INDEX) {
            Some(handle) => *handle,
            None => {
                warn!(
                    "Current Time attribute table reported {} handles, expected {}",
                    created.handles.len(),
                    CURRENT_TIME_TABLE_LEN
                );
                return;
            }
        };

        if let Some(bound) = self.value_handle {
            warn!(
                "Current Time value already bound to handle {}, ignoring handle {}",
                bound, handle
            );
            return;
        }

        debug!("Current Time value bound to handle {}", handle);
        self.value_handle = Some(handle);
    }

    fn on_read(
        &mut self,
        session: &Session,
        request: &ReadRequest,
        responder: &mut dyn GattResponder,
    ) -> bool {
        if self.value_handle != Some(request.handle) {
            trace!("Read of handle {} is not for the Current Time value", request.handle);
            return false;
        }

        // Long reads are not supported; the whole value fits one response
        if request.offset != 0 {
            trace!("Ignoring Current Time read at offset {}", request.offset);
            return false;
        }

        let now = self.clock.now();
        let current = match CurrentTime::from_timestamp(now, self.day_of_month) {
            Some(current) => current,
            None => {
                warn!("Cannot break down timestamp {} into a Current Time value", now);
                return false;
            }
        };

        let response = match GattResponse::new(request.handle, request.offset, &current.to_bytes()) {
            Ok(response) => response,
            Err(e) => {
                warn!("Cannot build Current Time response: {}", e);
                return false;
            }
        };

        match responder.send_response(
            session.gatt_if,
            request.conn_id,
            request.trans_id,
            GattStatus::Ok,
            &response,
        ) {
            Ok(()) => {
                debug!(
                    "Served Current Time {:?} on connection {} (transaction {})",
                    current, request.conn_id, request.trans_id
                );
                true
            }
            Err(e) => {
                warn!("Failed to send Current Time response: {}", e);
                false
            }
        }
    }
}

impl<C: TimeSource> GattsEventHandler for CurrentTimeService<C> {
    fn handle_event(
        &mut self,
        session: &Session,
        event: &GattsEvent,
        responder: &mut dyn GattResponder,
    ) -> bool {
        match event {
            GattsEvent::AttributeTableCreated(created) => {
                self.on_table_created(created);
                false
            }
            GattsEvent::Read(request) => self.on_read(session, request, responder),
            GattsEvent::Other(kind) => {
                trace!("Current Time service ignoring {:?} event", kind);
                false
            }
        }
    }
}

/// Register the Current Time Service on `stack` if `config` enables it.
///
/// A disabled service is not registered and still counts as success.
pub fn init<S, C>(config: &CurrentTimeConfig, stack: &mut S, clock: C) -> Result<()>
where
    S: GattStack + ?Sized,
    C: TimeSource + 'static,
{
    if !config.enable {
        info!("Current Time service disabled");
        return Ok(());
    }

    let service = CurrentTimeService::new(clock, config);
    stack.register_service(CurrentTimeService::<C>::table(), Box::new(service))?;
    info!("Current Time service registered");
    Ok(())
}
