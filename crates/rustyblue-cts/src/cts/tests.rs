//! Unit tests for the Current Time Service

use super::*;
use crate::att::GattStatus;
use crate::error::{Error, Result};
use crate::gatt::{
    AttributeDescriptor, AttributeTableCreated, ConnId, GattIf, GattResponder, GattResponse,
    GattStack, GattsEvent, GattsEventHandler, GattsEventKind, LoopbackStack, ReadOutcome,
    ReadRequest, Session, Uuid,
};
use crate::time::TimeSource;
use std::cell::Cell;
use std::rc::Rc;

// 2023-11-14T22:13:20Z, a Tuesday
const TUESDAY: f64 = 1_700_000_000.0;
// 2024-03-10T00:00:00Z, a Sunday
const SUNDAY: f64 = 1_710_028_800.0;

const VALUE_HANDLE: u16 = 42;
const GATT_IF: GattIf = 3;
const CONN_ID: ConnId = 7;

/// Mock clock whose time can be moved after it is handed out
#[derive(Clone)]
struct MockClock(Rc<Cell<f64>>);

impl MockClock {
    fn new(now: f64) -> Self {
        Self(Rc::new(Cell::new(now)))
    }

    fn set(&self, now: f64) {
        self.0.set(now);
    }
}

impl TimeSource for MockClock {
    fn now(&self) -> f64 {
        self.0.get()
    }
}

/// Mock responder that records sends and can be told to fail
#[derive(Default)]
struct RecordingResponder {
    sent: Vec<(GattIf, ConnId, u32, GattStatus, GattResponse)>,
    fail: bool,
}

impl GattResponder for RecordingResponder {
    fn send_response(
        &mut self,
        gatt_if: GattIf,
        conn_id: ConnId,
        trans_id: u32,
        status: GattStatus,
        response: &GattResponse,
    ) -> Result<()> {
        if self.fail {
            return Err(Error::ResponseRejected(GattStatus::InsufficientResources));
        }
        self.sent
            .push((gatt_if, conn_id, trans_id, status, response.clone()));
        Ok(())
    }
}

/// Mock stack that only records registrations
#[derive(Default)]
struct RecordingStack {
    tables: Vec<&'static [AttributeDescriptor]>,
    reject: bool,
}

impl GattStack for RecordingStack {
    fn register_service(
        &mut self,
        table: &'static [AttributeDescriptor],
        _handler: Box<dyn GattsEventHandler>,
    ) -> Result<()> {
        if self.reject {
            return Err(Error::Registration("no free interface".into()));
        }
        self.tables.push(table);
        Ok(())
    }
}

fn session() -> Session {
    Session {
        gatt_if: GATT_IF,
        conn_id: Some(CONN_ID),
    }
}

fn table_created(handles: Vec<u16>) -> GattsEvent {
    GattsEvent::AttributeTableCreated(AttributeTableCreated {
        status: GattStatus::Ok,
        service_uuid: Uuid::from_u16(CURRENT_TIME_SERVICE_UUID),
        handles,
    })
}

fn read(handle: u16, offset: u16) -> GattsEvent {
    GattsEvent::Read(ReadRequest {
        conn_id: CONN_ID,
        trans_id: 0xA5A5,
        address: [0xC0, 0xFF, 0xEE, 0x00, 0x11, 0x22],
        handle,
        offset,
        is_long: offset != 0,
        need_rsp: true,
    })
}

fn service(now: f64, encoding: DayOfMonthEncoding) -> (CurrentTimeService<MockClock>, MockClock) {
    let clock = MockClock::new(now);
    let config = CurrentTimeConfig::default()
        .with_enable(true)
        .with_day_of_month(encoding);
    (CurrentTimeService::new(clock.clone(), &config), clock)
}

fn bound_service(now: f64, encoding: DayOfMonthEncoding) -> (CurrentTimeService<MockClock>, MockClock) {
    let (mut service, clock) = service(now, encoding);
    let mut responder = RecordingResponder::default();
    let consumed = service.handle_event(
        &session(),
        &table_created(vec![40, 41, VALUE_HANDLE]),
        &mut responder,
    );
    assert!(!consumed);
    assert!(responder.sent.is_empty());
    assert_eq!(service.value_handle(), Some(VALUE_HANDLE));
    (service, clock)
}

/// Serve one read of the value handle and decode the response
fn serve(service: &mut CurrentTimeService<MockClock>) -> CurrentTime {
    let mut responder = RecordingResponder::default();
    assert!(service.handle_event(&session(), &read(VALUE_HANDLE, 0), &mut responder));
    assert_eq!(responder.sent.len(), 1);

    let (gatt_if, conn_id, trans_id, status, response) = &responder.sent[0];
    assert_eq!(*gatt_if, GATT_IF);
    assert_eq!(*conn_id, CONN_ID);
    assert_eq!(*trans_id, 0xA5A5);
    assert_eq!(*status, GattStatus::Ok);
    assert_eq!(response.handle, VALUE_HANDLE);
    assert_eq!(response.offset, 0);
    assert_eq!(response.len() as usize, CURRENT_TIME_LEN);

    CurrentTime::from_bytes(response.value()).unwrap()
}

#[test]
fn test_read_before_table_created() {
    let (mut service, _clock) = service(TUESDAY, DayOfMonthEncoding::Calendar);
    assert!(!service.is_bound());

    let mut responder = RecordingResponder::default();
    for handle in [0, 1, VALUE_HANDLE, 0xFFFF] {
        assert!(!service.handle_event(&session(), &read(handle, 0), &mut responder));
    }
    assert!(responder.sent.is_empty());
}

#[test]
fn test_read_serves_current_time() {
    let (mut service, _clock) = bound_service(TUESDAY + 0.5, DayOfMonthEncoding::Calendar);
    let time = serve(&mut service);

    assert_eq!(time.year, 2023);
    assert_eq!(time.month, 11);
    assert_eq!(time.day, 14);
    assert_eq!(time.hours, 22);
    assert_eq!(time.minutes, 13);
    assert_eq!(time.seconds, 20);
    assert_eq!(time.day_of_week, DayOfWeek::Tuesday);
    assert_eq!(time.fractions256, 128);
    assert!(time.adjust_reason.is_empty());
}

#[test]
fn test_legacy_day_of_month() {
    let (mut service, _clock) = bound_service(TUESDAY, DayOfMonthEncoding::Legacy);
    let time = serve(&mut service);

    // The 14th goes out as 15; every other field is unaffected
    assert_eq!(time.day, 15);
    assert_eq!((time.year, time.month), (2023, 11));
    assert_eq!((time.hours, time.minutes, time.seconds), (22, 13, 20));
    assert_eq!(time.day_of_week, DayOfWeek::Tuesday);
}

#[test]
fn test_epoch() {
    let (mut service, _clock) = bound_service(0.0, DayOfMonthEncoding::Calendar);
    let time = serve(&mut service);

    assert_eq!((time.year, time.month, time.day), (1970, 1, 1));
    assert_eq!((time.hours, time.minutes, time.seconds), (0, 0, 0));
    assert_eq!(time.day_of_week, DayOfWeek::Thursday);
    assert_eq!(time.fractions256, 0);
}

#[test]
fn test_every_weekday() {
    let (mut service, clock) = bound_service(SUNDAY, DayOfMonthEncoding::Calendar);
    let expected = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    for (offset, day) in expected.iter().enumerate() {
        clock.set(SUNDAY + offset as f64 * 86_400.0);
        let time = serve(&mut service);
        assert_eq!(time.day_of_week, *day);
        assert_eq!(time.day as usize, 10 + offset);
    }
}

#[test]
fn test_fraction_boundaries() {
    let (mut service, clock) = bound_service(TUESDAY, DayOfMonthEncoding::Calendar);
    assert_eq!(serve(&mut service).fractions256, 0);

    clock.set(TUESDAY + 0.99609375);
    let time = serve(&mut service);
    assert_eq!(time.fractions256, 255);
    assert_eq!(time.seconds, 20);

    clock.set(TUESDAY + 0.999);
    let time = serve(&mut service);
    assert_eq!(time.fractions256, 255);
    assert_eq!(time.seconds, 20);

    clock.set(TUESDAY + 1.0 / 256.0);
    assert_eq!(serve(&mut service).fractions256, 1);
}

#[test]
fn test_wrong_handle_is_ignored() {
    let (mut service, _clock) = bound_service(TUESDAY, DayOfMonthEncoding::Calendar);
    let mut responder = RecordingResponder::default();

    for handle in [40, 41, VALUE_HANDLE + 1, 0] {
        assert!(!service.handle_event(&session(), &read(handle, 0), &mut responder));
    }
    assert!(responder.sent.is_empty());
}

#[test]
fn test_offset_read_is_ignored() {
    let (mut service, _clock) = bound_service(TUESDAY, DayOfMonthEncoding::Calendar);
    let mut responder = RecordingResponder::default();

    for offset in [1, 5, 22] {
        assert!(!service.handle_event(&session(), &read(VALUE_HANDLE, offset), &mut responder));
    }
    assert!(responder.sent.is_empty());
}

#[test]
fn test_unrepresentable_time_is_ignored() {
    let (mut service, clock) = bound_service(1e300, DayOfMonthEncoding::Calendar);
    let mut responder = RecordingResponder::default();
    assert!(!service.handle_event(&session(), &read(VALUE_HANDLE, 0), &mut responder));

    // Year 70005 does not fit the 16-bit year field
    clock.set(2_147_000_000_000.0);
    assert!(!service.handle_event(&session(), &read(VALUE_HANDLE, 0), &mut responder));

    for now in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        clock.set(now);
        assert!(!service.handle_event(&session(), &read(VALUE_HANDLE, 0), &mut responder));
        assert!(service.current_time().is_none());
    }
    assert!(responder.sent.is_empty());

    // The service answers again once the clock recovers
    clock.set(TUESDAY);
    assert!(service.handle_event(&session(), &read(VALUE_HANDLE, 0), &mut responder));
    assert_eq!(responder.sent.len(), 1);
}

#[test]
fn test_far_future_time() {
    // 9999-12-31T23:59:59Z
    let (mut service, _clock) = bound_service(253_402_300_799.0, DayOfMonthEncoding::Calendar);
    let time = serve(&mut service);

    assert_eq!((time.year, time.month, time.day), (9999, 12, 31));
    assert_eq!((time.hours, time.minutes, time.seconds), (23, 59, 59));
    assert_eq!(time.day_of_week, DayOfWeek::Friday);
}

#[test]
fn test_send_failure_is_not_consumed() {
    let (mut service, _clock) = bound_service(TUESDAY, DayOfMonthEncoding::Calendar);
    let mut responder = RecordingResponder {
        fail: true,
        ..Default::default()
    };
    assert!(!service.handle_event(&session(), &read(VALUE_HANDLE, 0), &mut responder));
}

#[test]
fn test_other_events_are_not_consumed() {
    let (mut service, _clock) = bound_service(TUESDAY, DayOfMonthEncoding::Calendar);
    let mut responder = RecordingResponder::default();

    for kind in [
        GattsEventKind::Register,
        GattsEventKind::Write,
        GattsEventKind::Mtu,
        GattsEventKind::Connect,
        GattsEventKind::Disconnect,
    ] {
        assert!(!service.handle_event(&session(), &GattsEvent::Other(kind), &mut responder));
    }
    assert!(responder.sent.is_empty());
    assert_eq!(service.value_handle(), Some(VALUE_HANDLE));
}

#[test]
fn test_malformed_table_created() {
    let (mut service, _clock) = service(TUESDAY, DayOfMonthEncoding::Calendar);
    let mut responder = RecordingResponder::default();

    // Too few handles
    service.handle_event(&session(), &table_created(vec![40, 41]), &mut responder);
    assert!(!service.is_bound());

    // Failed creation
    let failed = GattsEvent::AttributeTableCreated(AttributeTableCreated {
        status: GattStatus::InsufficientResources,
        service_uuid: Uuid::from_u16(CURRENT_TIME_SERVICE_UUID),
        handles: vec![40, 41, 42],
    });
    service.handle_event(&session(), &failed, &mut responder);
    assert!(!service.is_bound());

    // Another service's table
    let foreign = GattsEvent::AttributeTableCreated(AttributeTableCreated {
        status: GattStatus::Ok,
        service_uuid: Uuid::from_u16(0x180F),
        handles: vec![40, 41, 42],
    });
    service.handle_event(&session(), &foreign, &mut responder);
    assert!(!service.is_bound());
    assert!(responder.sent.is_empty());
}

#[test]
fn test_handle_is_bound_once() {
    let (mut service, _clock) = bound_service(TUESDAY, DayOfMonthEncoding::Calendar);
    let mut responder = RecordingResponder::default();

    service.handle_event(&session(), &table_created(vec![50, 51, 52]), &mut responder);
    assert_eq!(service.value_handle(), Some(VALUE_HANDLE));
    assert!(!service.handle_event(&session(), &read(52, 0), &mut responder));
    assert!(responder.sent.is_empty());
}

#[test]
fn test_independent_instances() {
    let (mut first, _) = bound_service(TUESDAY, DayOfMonthEncoding::Calendar);
    let (mut second, _) = service(TUESDAY, DayOfMonthEncoding::Calendar);
    let mut responder = RecordingResponder::default();
    second.handle_event(&session(), &table_created(vec![60, 61, 62]), &mut responder);

    assert_eq!(first.value_handle(), Some(VALUE_HANDLE));
    assert_eq!(second.value_handle(), Some(62));
    assert!(!first.handle_event(&session(), &read(62, 0), &mut responder));
    assert!(second.handle_event(&session(), &read(62, 0), &mut responder));
    assert!(first.handle_event(&session(), &read(VALUE_HANDLE, 0), &mut responder));
    assert_eq!(responder.sent.len(), 2);
}

#[test]
fn test_init_disabled_registers_nothing() {
    let mut stack = RecordingStack::default();
    let config = CurrentTimeConfig::default();
    assert!(!config.enable);

    init(&config, &mut stack, MockClock::new(TUESDAY)).unwrap();
    assert!(stack.tables.is_empty());

    let mut loopback = LoopbackStack::new();
    init(&config, &mut loopback, MockClock::new(TUESDAY)).unwrap();
    assert_eq!(loopback.service_count(), 0);
    assert_eq!(loopback.attribute_count(), 0);
}

#[test]
fn test_init_enabled_registers_table() {
    let mut stack = RecordingStack::default();
    let config = CurrentTimeConfig::default().with_enable(true);

    init(&config, &mut stack, MockClock::new(TUESDAY)).unwrap();
    assert_eq!(stack.tables.len(), 1);
    assert_eq!(stack.tables[0].len(), CURRENT_TIME_TABLE_LEN);
    assert_eq!(stack.tables[0], &CURRENT_TIME_SERVICE_TABLE[..]);
}

#[test]
fn test_init_propagates_registration_failure() {
    let mut stack = RecordingStack {
        reject: true,
        ..Default::default()
    };
    let config = CurrentTimeConfig::default().with_enable(true);

    assert!(matches!(
        init(&config, &mut stack, MockClock::new(TUESDAY)),
        Err(Error::Registration(_))
    ));
}

#[test]
fn test_end_to_end_on_loopback() {
    let clock = MockClock::new(SUNDAY + 0.25);
    let config = CurrentTimeConfig::default()
        .with_enable(true)
        .with_day_of_month(DayOfMonthEncoding::Calendar);
    let mut stack = LoopbackStack::new();
    init(&config, &mut stack, clock.clone()).unwrap();

    assert_eq!(stack.service_handles(), vec![1]);
    let conn = stack.connect([0xAA; 6]);

    // Declarations are answered by the stack
    assert_eq!(stack.read(conn, 1, 0), ReadOutcome::Value(vec![0x05, 0x18]));
    assert_eq!(stack.read(conn, 2, 0), ReadOutcome::Value(vec![0x02]));

    let value = match stack.read(conn, 3, 0) {
        ReadOutcome::Value(value) => value,
        other => panic!("unexpected read outcome {:?}", other),
    };
    assert_eq!(value, vec![0xE8, 0x07, 3, 10, 0, 0, 0, 7, 64, 0]);

    // Blob reads of the value go unanswered
    assert_eq!(stack.read(conn, 3, 1), ReadOutcome::NoResponse);

    clock.set(TUESDAY);
    let time = match stack.read(conn, 3, 0) {
        ReadOutcome::Value(value) => CurrentTime::from_bytes(&value).unwrap(),
        other => panic!("unexpected read outcome {:?}", other),
    };
    assert_eq!(time.day_of_week, DayOfWeek::Tuesday);
    assert_eq!(stack.responses().len(), 2);
}
