//! # Movement Record

//! This module defines the `Movement` struct, the central record of the yard: one row per visit of one truck,
//! from gate entry to leaving the distribution center. A movement owns its timestamp history; every state it
//! enters is stamped exactly once and the record is never deleted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::errors::{YardError, YardResult};
use crate::models::idirectory::{Dock, DockId, MovementId, Truck, TruckId, User, UserId};
use crate::models::istates::{MovementState, Priority};

/// The state-entry timestamps of a movement, one per lifecycle event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementTimestamps {
    pub gate_in_at: Option<NaiveDateTime>,
    pub available_at: Option<NaiveDateTime>,
    pub requested_at: Option<NaiveDateTime>,
    pub assigned_at: Option<NaiveDateTime>,
    pub driver_confirmed_at: Option<NaiveDateTime>,
    pub at_dock_at: Option<NaiveDateTime>,
    pub load_ready_at: Option<NaiveDateTime>,
    pub dock_exit_at: Option<NaiveDateTime>,
    pub cd_exit_at: Option<NaiveDateTime>,
}

impl MovementTimestamps {
    /// The slot stamped when `state` is entered.
    pub fn slot_mut(&mut self, state: MovementState) -> &mut Option<NaiveDateTime> {
        match state {
            MovementState::GateIn => &mut self.gate_in_at,
            MovementState::YardAvailable => &mut self.available_at,
            MovementState::Requested => &mut self.requested_at,
            MovementState::AssignedEnRoute => &mut self.assigned_at,
            MovementState::AtDock => &mut self.at_dock_at,
            MovementState::LoadReady => &mut self.load_ready_at,
            MovementState::DockExit => &mut self.dock_exit_at,
            MovementState::CdExit => &mut self.cd_exit_at,
        }
    }

    /// All nine slots in lifecycle order, driver confirmation sitting between assignment and arrival.
    pub fn in_order(&self) -> [Option<NaiveDateTime>; 9] {
        [
            self.gate_in_at,
            self.available_at,
            self.requested_at,
            self.assigned_at,
            self.driver_confirmed_at,
            self.at_dock_at,
            self.load_ready_at,
            self.dock_exit_at,
            self.cd_exit_at,
        ]
    }
}

/// One yard visit of one truck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,
    pub truck_id: TruckId,
    pub dock_id: Option<DockId>,
    pub assigned_by: Option<UserId>,
    pub state: MovementState,
    pub priority: Priority,
    #[serde(flatten)]
    pub timestamps: MovementTimestamps,
    pub notes: Option<String>,
    /// Free-text label of whoever requested the truck from dispatch.
    pub requested_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Movement {
    /// Creates a movement at the gate. The id is filled in by the store.
    pub fn at_gate(truck_id: TruckId, now: NaiveDateTime) -> Self {
        Movement {
            id: 0,
            truck_id,
            dock_id: None,
            assigned_by: None,
            state: MovementState::GateIn,
            priority: Priority::Normal,
            timestamps: MovementTimestamps {
                gate_in_at: Some(now),
                ..MovementTimestamps::default()
            },
            notes: None,
            requested_by: None,
            created_at: now,
            updated_at: None,
        }
    }

    /// Fails with `InvalidTransition` unless the movement is in one of `expected`.
    pub fn ensure_state(&self, expected: &[MovementState]) -> YardResult<()> {
        if expected.contains(&self.state) {
            Ok(())
        } else {
            Err(YardError::invalid_transition(self.id, self.state, expected))
        }
    }

    /// Moves to `next` if the lifecycle allows it, stamping the entry time.
    pub fn advance(&mut self, next: MovementState, now: NaiveDateTime) -> YardResult<()> {
        self.ensure_state(next.predecessors())?;
        self.enter(next, now);
        Ok(())
    }

    /// Enters `next` without checking the lifecycle. Only the permissive CD exit uses this directly.
    pub fn enter(&mut self, next: MovementState, now: NaiveDateTime) {
        self.state = next;
        *self.timestamps.slot_mut(next) = Some(now);
        self.updated_at = Some(now);
    }

    /// Appends a line to the free-text notes.
    pub fn append_notes(&mut self, extra: &str) {
        self.notes = Some(match self.notes.take() {
            Some(existing) => format!("{}\n{}", existing, extra),
            None => extra.to_string(),
        });
    }

    /// Minutes spent waiting in the yard before reaching the dock.
    pub fn wait_minutes(&self) -> Option<f64> {
        minutes_between(self.timestamps.available_at, self.timestamps.at_dock_at)
    }

    /// Minutes spent at the dock.
    pub fn dock_minutes(&self) -> Option<f64> {
        minutes_between(self.timestamps.at_dock_at, self.timestamps.dock_exit_at)
    }
}

pub(crate) fn minutes_between(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Option<f64> {
    match (start, end) {
        (Some(start), Some(end)) => Some((end - start).num_milliseconds() as f64 / 60_000.0),
        _ => None,
    }
}

/// A movement with its references resolved, as returned by the read endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MovementDetail {
    #[serde(flatten)]
    pub movement: Movement,
    pub truck: Option<Truck>,
    pub driver: Option<User>,
    pub dock: Option<Dock>,
    pub assigner: Option<User>,
}

/// Filter for listing movements.
#[derive(Debug, Clone, Default)]
pub struct MovementFilter {
    pub state: Option<MovementState>,
    /// Gate-entry calendar day.
    pub date: Option<chrono::NaiveDate>,
    pub limit: usize,
}

impl MovementFilter {
    pub fn matches(&self, movement: &Movement) -> bool {
        if let Some(state) = self.state {
            if movement.state != state {
                return false;
            }
        }
        if let Some(date) = self.date {
            match movement.timestamps.gate_in_at {
                Some(gate_in) if gate_in.date() == date => {}
                _ => return false,
            }
        }
        true
    }
}
