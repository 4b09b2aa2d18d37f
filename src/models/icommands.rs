//! # Ledger Commands

//! Inputs of the ledger transitions that take more than a movement id. They arrive as JSON bodies on the HTTP
//! surface and are passed to the ledger as-is.

use derive_more::Constructor;
use serde::Deserialize;
use crate::models::idirectory::{DockId, MovementId, UserId};
use crate::models::istates::Priority;

/// Gate scan: the truck's plate and the code of the driver at the wheel.
#[derive(Debug, Clone, Deserialize, Constructor)]
pub struct GateEntry {
    pub plate: String,
    pub driver_code: String,
}

/// Dispatch asking logistics for a specific truck.
#[derive(Debug, Clone, Deserialize, Constructor)]
pub struct TruckRequest {
    pub movement_id: MovementId,
    /// Free-text label of the requesting dispatcher.
    pub requester: String,
    #[serde(default)]
    pub dock_id: Option<DockId>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Logistics sending a truck to a dock.
#[derive(Debug, Clone, Deserialize, Constructor)]
pub struct DockAssignmentRequest {
    pub movement_id: MovementId,
    pub dock_id: DockId,
    pub assigner_id: UserId,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Exit scan at the distribution center gate.
#[derive(Debug, Clone, Deserialize, Constructor)]
pub struct CdExit {
    pub movement_id: MovementId,
    pub driver_code: String,
}

/// Raw filter of the movement listing, validated by the ledger.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovementQuery {
    /// State name, e.g. `YARD_AVAILABLE`.
    #[serde(default)]
    pub state: Option<String>,
    /// Gate-entry day as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}
