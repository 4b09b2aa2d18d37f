//! # Push Event Definitions

//! This module defines the `YardEvent` enum, the set of real-time events pushed to connected sessions when the
//! ledger applies a transition. Every event serializes to a flat JSON object of the shape
//! `{event_type, message, movement_id, ...extra}`.

use serde_json::{json, Map, Value};
use crate::models::idirectory::{DockId, MovementId};
use crate::models::istates::Priority;

/// Type tag of the persisted dock assignment notification.
pub const DOCK_ASSIGNMENT: &str = "dock_assignment";
/// Type tag of the persisted load ready notification.
pub const LOAD_READY: &str = "load_ready";

/// A real-time event emitted by the ledger
#[derive(Debug, Clone, PartialEq)]
pub enum YardEvent {
    /// A truck was registered at the gate
    NewEntry { movement_id: MovementId, plate: String },
    /// A truck is parked and ready to be called
    TruckAvailable { movement_id: MovementId },
    /// Dispatch requested a truck
    TruckRequested { movement_id: MovementId, priority: Priority },
    /// A dock was assigned; sent to the driver only
    DockAssignment { movement_id: MovementId, dock_number: i32 },
    /// The driver acknowledged the assignment
    DriverConfirmed { movement_id: MovementId },
    /// The truck arrived at its dock
    TruckAtDock { movement_id: MovementId },
    /// Loading is finished; sent to the driver only
    LoadReady { movement_id: MovementId, dock_number: Option<i32> },
    /// The truck pulled out and the dock is free again
    DockFreed { movement_id: MovementId, dock_id: Option<DockId> },
}

impl YardEvent {
    /// The `event_type` tag carried on the wire
    pub fn event_type(&self) -> &'static str {
        match self {
            YardEvent::NewEntry { .. } => "new_entry",
            YardEvent::TruckAvailable { .. } => "truck_available",
            YardEvent::TruckRequested { .. } => "truck_requested",
            YardEvent::DockAssignment { .. } => DOCK_ASSIGNMENT,
            YardEvent::DriverConfirmed { .. } => "driver_confirmed",
            YardEvent::TruckAtDock { .. } => "truck_at_dock",
            YardEvent::LoadReady { .. } => LOAD_READY,
            YardEvent::DockFreed { .. } => "dock_freed",
        }
    }

    pub fn movement_id(&self) -> MovementId {
        match self {
            YardEvent::NewEntry { movement_id, .. }
            | YardEvent::TruckAvailable { movement_id }
            | YardEvent::TruckRequested { movement_id, .. }
            | YardEvent::DockAssignment { movement_id, .. }
            | YardEvent::DriverConfirmed { movement_id }
            | YardEvent::TruckAtDock { movement_id }
            | YardEvent::LoadReady { movement_id, .. }
            | YardEvent::DockFreed { movement_id, .. } => *movement_id,
        }
    }

    /// Human readable text shown on the receiving device
    pub fn message(&self) -> String {
        match self {
            YardEvent::NewEntry { plate, .. } => format!("Truck {} entered at the gate", plate),
            YardEvent::TruckAvailable { .. } => "New truck available in the yard".to_string(),
            YardEvent::TruckRequested { priority, .. } => format!("Dispatch requests a truck - Priority: {}", priority),
            YardEvent::DockAssignment { dock_number, .. } => format!("ATTENTION! Proceed to dock {}", dock_number),
            YardEvent::DriverConfirmed { .. } => "Driver confirmed the assignment - en route to dock".to_string(),
            YardEvent::TruckAtDock { .. } => "Truck at dock - loading started".to_string(),
            YardEvent::LoadReady { .. } => "LOAD READY! You may leave the dock".to_string(),
            YardEvent::DockFreed { .. } => "Dock freed".to_string(),
        }
    }

    /// The JSON object pushed to sessions
    pub fn to_payload(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("event_type".into(), json!(self.event_type()));
        payload.insert("message".into(), json!(self.message()));
        payload.insert("movement_id".into(), json!(self.movement_id()));
        match self {
            YardEvent::DockAssignment { dock_number, .. } => {
                payload.insert("dock_number".into(), json!(dock_number));
                payload.insert("confirmation_required".into(), json!(true));
            }
            YardEvent::TruckRequested { priority, .. } => {
                payload.insert("priority".into(), json!(priority));
            }
            YardEvent::LoadReady { dock_number, .. } => {
                payload.insert("dock_number".into(), json!(dock_number));
            }
            YardEvent::DockFreed { dock_id, .. } => {
                payload.insert("dock_id".into(), json!(dock_id));
            }
            _ => {}
        }
        Value::Object(payload)
    }
}
