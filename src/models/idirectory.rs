//! # Directory Entities

//! Trucks, docks and users as held by the directory store. These are attribute records: the ledger
//! references them by id and never owns them. Only `Dock::state` and `Dock::reserved_by` are written by
//! the ledger, and only through the dock allocator.

use chrono::NaiveDateTime;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use crate::models::istates::{DockState, Role, TruckType};

pub type UserId = i64;
pub type TruckId = i64;
pub type DockId = i64;
pub type MovementId = i64;
pub type NotificationId = i64;

/// A person known to the yard: driver, dispatcher, logistics planner or admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Login code, unique across users.
    pub code: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub pin: String,
    pub role: Role,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

/// Attributes needed to register a user.
#[derive(Debug, Clone, Deserialize, Constructor)]
pub struct NewUser {
    pub code: String,
    pub name: String,
    pub pin: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A truck that can enter the yard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: TruckId,
    /// License plate, stored upper case and unique across trucks.
    pub plate: String,
    pub truck_type: TruckType,
    /// Weak reference to the driver usually assigned to this truck.
    pub driver_id: Option<UserId>,
    pub capacity: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Constructor)]
pub struct NewTruck {
    pub plate: String,
    pub truck_type: TruckType,
    #[serde(default)]
    pub driver_id: Option<UserId>,
    #[serde(default)]
    pub capacity: Option<String>,
}

/// A physical loading bay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dock {
    pub id: DockId,
    /// Dock number painted on the bay, unique across docks.
    pub number: i32,
    pub name: Option<String>,
    /// `None` means the dock takes any truck type.
    pub permitted_type: Option<TruckType>,
    pub state: DockState,
    /// Movement holding the dock between assignment and arrival. The stored state stays `Free` meanwhile.
    pub reserved_by: Option<MovementId>,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

impl Dock {
    /// Whether a truck of the given type may be sent to this dock.
    pub fn accepts(&self, truck_type: TruckType) -> bool {
        self.permitted_type.map_or(true, |permitted| permitted == truck_type)
    }

    /// Free, active and not reserved by a travelling truck.
    pub fn is_available(&self) -> bool {
        self.active && self.state == DockState::Free && self.reserved_by.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Constructor)]
pub struct NewDock {
    pub number: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub permitted_type: Option<TruckType>,
}

/// Attribute edits an administrator may apply to a dock. State changes go through the dock allocator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DockAttributes {
    pub name: Option<String>,
    pub permitted_type: Option<Option<TruckType>>,
    pub active: Option<bool>,
}
