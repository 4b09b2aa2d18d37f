//! # Dashboard Read Models

//! Shapes returned by the read-only side of the service: yard statistics, the per-dock summary and the active
//! queue of trucks waiting for a dock.

use serde::Serialize;
use crate::models::idirectory::Dock;
use crate::models::imovement::MovementDetail;

/// Point-in-time counts and today's running averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YardStats {
    /// Movements in any state of `MovementState::ACTIVE`
    pub trucks_in_yard: usize,
    pub trucks_available: usize,
    /// Movements at `AT_DOCK` or `LOAD_READY`
    pub trucks_at_dock: usize,
    pub docks_free: usize,
    pub docks_occupied: usize,
    /// Mean minutes from yard availability to dock arrival over today's completed movements
    pub average_wait_minutes: Option<f64>,
    /// Mean minutes from dock arrival to dock exit over today's completed movements
    pub average_dock_minutes: Option<f64>,
}

/// One active dock and what currently occupies it.
#[derive(Debug, Clone, Serialize)]
pub struct DockSummary {
    pub dock: Dock,
    pub current_movement: Option<MovementDetail>,
    pub occupied_minutes: Option<f64>,
}

/// Trucks waiting for or travelling to a dock, each list oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveQueue {
    pub available: Vec<MovementDetail>,
    pub requested: Vec<MovementDetail>,
    pub assigned: Vec<MovementDetail>,
}
