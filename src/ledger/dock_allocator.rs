//! # Dock Allocator

//! Keeps `Dock::state` in lockstep with the movements that use the dock. A dock is reserved when a truck is
//! assigned to it, occupied when the truck arrives and released when it departs. Nothing else writes dock state.
//!
//! Callers must hold the dock's lock from `EntityLocks::docks` around every call.

use std::sync::Arc;
use tracing::{debug, info};
use crate::errors::{YardError, YardResult};
use crate::models::{Dock, DockId, DockState, MovementId};
use crate::state_management::YardStore;

pub struct DockAllocator {
    store: Arc<dyn YardStore>,
}

impl DockAllocator {
    pub fn new(store: Arc<dyn YardStore>) -> Self {
        Self { store }
    }

    async fn load(&self, dock_id: DockId) -> YardResult<Dock> {
        self.store.get_dock(dock_id).await?
            .ok_or_else(|| YardError::NotFound(format!("Dock {}", dock_id)))
    }

    /// Whether the dock can take a new assignment.
    pub async fn is_free(&self, dock_id: DockId) -> YardResult<bool> {
        Ok(self.load(dock_id).await?.is_available())
    }

    /// Holds the dock for a travelling truck. The stored state stays `Free`.
    pub async fn reserve(&self, dock_id: DockId, movement_id: MovementId) -> YardResult<Dock> {
        let mut dock = self.load(dock_id).await?;
        if !dock.is_available() {
            return Err(YardError::Conflict(unavailable(&dock)));
        }
        dock.reserved_by = Some(movement_id);
        self.store.put_dock(dock.clone()).await?;
        debug!("Dock {} reserved by movement {}", dock.number, movement_id);
        Ok(dock)
    }

    /// Marks the dock occupied by the arriving movement and drops its reservation.
    pub async fn occupy(&self, dock_id: DockId, movement_id: MovementId) -> YardResult<Dock> {
        let mut dock = self.load(dock_id).await?;
        if dock.state != DockState::Free {
            return Err(YardError::Conflict(format!("Dock {} is {}", dock.number, dock.state)));
        }
        match dock.reserved_by {
            Some(holder) if holder != movement_id => {
                return Err(YardError::Conflict(format!(
                    "Dock {} is reserved by movement {}", dock.number, holder
                )));
            }
            _ => {}
        }
        dock.state = DockState::Occupied;
        dock.reserved_by = None;
        self.store.put_dock(dock.clone()).await?;
        info!("Dock {} occupied by movement {}", dock.number, movement_id);
        Ok(dock)
    }

    /// Frees the dock after the truck pulled out.
    pub async fn release(&self, dock_id: DockId) -> YardResult<Dock> {
        let mut dock = self.load(dock_id).await?;
        if dock.state != DockState::Occupied {
            return Err(YardError::Conflict(format!("Dock {} is {}, not OCCUPIED", dock.number, dock.state)));
        }
        dock.state = DockState::Free;
        dock.reserved_by = None;
        self.store.put_dock(dock.clone()).await?;
        info!("Dock {} released", dock.number);
        Ok(dock)
    }

    /// Drops whatever hold `movement_id` has on the dock: its reservation, or the occupation if the dock is
    /// occupied. Used when a movement leaves the yard without passing through the dock exit.
    pub async fn vacate(&self, dock_id: DockId, movement_id: MovementId) -> YardResult<Dock> {
        let mut dock = self.load(dock_id).await?;
        if dock.reserved_by == Some(movement_id) {
            dock.reserved_by = None;
        } else if dock.state == DockState::Occupied {
            dock.state = DockState::Free;
        } else {
            return Ok(dock);
        }
        self.store.put_dock(dock.clone()).await?;
        info!("Dock {} vacated by movement {}", dock.number, movement_id);
        Ok(dock)
    }

    /// Switches a dock in or out of maintenance.
    ///
    /// Refused while a movement holds the dock.
    pub async fn set_maintenance(&self, dock_id: DockId, enabled: bool) -> YardResult<Dock> {
        let mut dock = self.load(dock_id).await?;
        if let Some(holder) = dock.reserved_by {
            return Err(YardError::Conflict(format!("Dock {} is reserved by movement {}", dock.number, holder)));
        }
        let target = match (dock.state, enabled) {
            (DockState::Occupied, _) => {
                return Err(YardError::Conflict(format!("Dock {} is OCCUPIED", dock.number)));
            }
            (_, true) => DockState::Maintenance,
            (_, false) => DockState::Free,
        };
        if dock.state != target {
            dock.state = target;
            self.store.put_dock(dock.clone()).await?;
            info!("Dock {} is now {}", dock.number, dock.state);
        }
        Ok(dock)
    }
}

fn unavailable(dock: &Dock) -> String {
    if !dock.active {
        format!("Dock {} is inactive", dock.number)
    } else if let Some(holder) = dock.reserved_by {
        format!("Dock {} is reserved by movement {}", dock.number, holder)
    } else {
        format!("Dock {} is {}", dock.number, dock.state)
    }
}
