//! Example serving the Current Time Service on the in-memory stack
//!
//! Registers the service, connects a simulated central and reads the
//! Current Time characteristic once per second. Run with
//! `RUST_LOG=debug` to see the service's log output.

use rustyblue_cts::cts::{self, CurrentTime, CurrentTimeConfig, DayOfMonthEncoding};
use rustyblue_cts::gatt::{LoopbackStack, ReadOutcome};
use rustyblue_cts::SystemClock;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = CurrentTimeConfig::default()
        .with_enable(true)
        .with_day_of_month(DayOfMonthEncoding::Calendar);

    let mut stack = LoopbackStack::new();
    cts::init(&config, &mut stack, SystemClock)?;

    let service_handle = stack
        .service_handles()
        .first()
        .copied()
        .ok_or("Current Time service was not registered")?;
    let value_handle = service_handle + cts::CURRENT_TIME_VALUE_INDEX as u16;
    println!(
        "Current Time service at handle {}, value at handle {}",
        service_handle, value_handle
    );

    let conn_id = stack.connect([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    println!("Central connected as connection {}", conn_id);

    for _ in 0..3 {
        match stack.read(conn_id, value_handle, 0) {
            ReadOutcome::Value(value) => {
                let time = CurrentTime::from_bytes(&value)?;
                println!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02} +{}/256 ({:?}) raw {:02x?}",
                    time.year,
                    time.month,
                    time.day,
                    time.hours,
                    time.minutes,
                    time.seconds,
                    time.fractions256,
                    time.day_of_week,
                    value
                );
            }
            other => println!("Read failed: {:?}", other),
        }
        stack.drain_responses();

        thread::sleep(Duration::from_secs(1));
    }

    stack.disconnect(conn_id);
    println!("Central disconnected");

    Ok(())
}
