//! GATT (Generic Attribute Profile) server plumbing
//!
//! This module provides the pieces a GATT service needs to live inside a
//! BLE stack: attribute tables, the events the stack delivers, the traits
//! the stack implements, and an in-memory stack for hosting services
//! without a controller.

pub mod event;
pub mod loopback;
pub mod stack;
pub mod table;
pub mod types;


pub use event::{
    AttributeTableCreated, ConnId, GattIf, GattsEvent, GattsEventKind, ReadRequest, Session,
};
pub use loopback::{LoopbackStack, ReadOutcome, ResponseLog, SentResponse};
pub use stack::{GattResponder, GattResponse, GattStack, GattsEventHandler};
pub use table::{AttributeControl, AttributeDescriptor};
pub use types::{CharacteristicProperties, Uuid};
