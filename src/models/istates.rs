//! # Yard State Enums

//! This module defines the closed sets used across the yard: movement states, dock states, user roles,
//! truck types and request priorities. Each is a plain tagged enum; the wire form is fixed by serde and
//! mirrored by `Display` so log lines and error messages read the same as the JSON.

use serde::{Deserialize, Serialize};
use derive_more::Display;

/// The lifecycle state of a movement (one yard visit of one truck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementState {
    /// Registered at the gate.
    #[display("GATE_IN")]
    GateIn,
    /// Parked in the yard and ready to be called.
    #[display("YARD_AVAILABLE")]
    YardAvailable,
    /// Dispatch asked for this truck.
    #[display("REQUESTED")]
    Requested,
    /// A dock was assigned and the driver is on the way.
    #[display("ASSIGNED_EN_ROUTE")]
    AssignedEnRoute,
    /// The truck is physically at its dock.
    #[display("AT_DOCK")]
    AtDock,
    /// Loading finished, the driver may pull out.
    #[display("LOAD_READY")]
    LoadReady,
    /// The truck left the dock.
    #[display("DOCK_EXIT")]
    DockExit,
    /// The truck left the distribution center.
    #[display("CD_EXIT")]
    CdExit,
}

impl MovementState {
    /// States counted as "in the yard". Used by the stats aggregator.
    pub const ACTIVE: [MovementState; 6] = [
        MovementState::GateIn,
        MovementState::YardAvailable,
        MovementState::Requested,
        MovementState::AssignedEnRoute,
        MovementState::AtDock,
        MovementState::LoadReady,
    ];

    /// Whether the movement still blocks a new gate entry for its truck.
    pub fn is_open(self) -> bool {
        !matches!(self, MovementState::DockExit | MovementState::CdExit)
    }

    /// Whether the truck is physically holding its dock.
    pub fn is_at_dock(self) -> bool {
        matches!(self, MovementState::AtDock | MovementState::LoadReady)
    }

    /// The states from which `self` may be entered. `GateIn` is only entered on creation.
    pub fn predecessors(self) -> &'static [MovementState] {
        match self {
            MovementState::GateIn => &[],
            MovementState::YardAvailable => &[MovementState::GateIn],
            MovementState::Requested => &[MovementState::YardAvailable],
            MovementState::AssignedEnRoute => &[MovementState::YardAvailable, MovementState::Requested],
            MovementState::AtDock => &[MovementState::AssignedEnRoute],
            MovementState::LoadReady => &[MovementState::AtDock],
            MovementState::DockExit => &[MovementState::LoadReady],
            MovementState::CdExit => &[MovementState::DockExit],
        }
    }
}

/// The physical state of a dock as stored on the dock record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DockState {
    #[display("FREE")]
    Free,
    #[display("OCCUPIED")]
    Occupied,
    #[display("MAINTENANCE")]
    Maintenance,
}

/// The role a directory user holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[display("ADMIN")]
    Admin,
    #[display("DRIVER")]
    Driver,
    #[display("DISPATCH")]
    Dispatch,
    #[display("LOGISTICS")]
    Logistics,
}

/// Cargo class of a truck, also used to restrict which trucks a dock accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum TruckType {
    #[display("dry")]
    Dry,
    #[display("refrigerated")]
    Refrigerated,
    #[display("mixed")]
    Mixed,
}

/// Urgency attached to a dispatch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    #[default]
    #[display("NORMAL")]
    Normal,
    #[display("URGENT")]
    Urgent,
    #[display("CRITICAL")]
    Critical,
}
