//! # Movement Ledger

//! This module defines the `MovementLedger`, the only writer of movement records and, through the
//! `DockAllocator`, of dock state. Every transition runs under the locks of the entities it touches (truck,
//! then movement, then dock), validates the current state, writes the store and appends an audit entry.
//! Pushes go out only after the locks are released; a failed push never undoes a write.

use std::sync::Arc;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;
use tracing::{info, warn};
use crate::config::LedgerSettings;
use crate::errors::{YardError, YardResult};
use crate::ledger::dock_allocator::DockAllocator;
use crate::ledger::entity_locks::EntityLocks;
use crate::models::{
    local_now, ActiveQueue, AuditEntry, CdExit, Dock, DockAssignmentRequest, DockId, DockState,
    DockSummary, GateEntry, Movement, MovementDetail, MovementFilter, MovementId, MovementQuery, MovementState,
    Notification, NotificationId, Role, Truck, TruckId, TruckRequest, User, UserId, YardEvent, YardStats,
    DOCK_ASSIGNMENT, LOAD_READY,
};
use crate::models::imovement::minutes_between;
use crate::notifications::NotificationFanOut;
use crate::state_management::{AuditBatcher, YardStore};
use crate::stats::compute_stats;

/// Owns the movement lifecycle and keeps docks in step with it.
pub struct MovementLedger {
    store: Arc<dyn YardStore>,
    docks: DockAllocator,
    fan_out: Arc<NotificationFanOut>,
    locks: EntityLocks,
    audit_mirror: Option<Arc<AuditBatcher>>,
    settings: LedgerSettings,
}

fn rejected(operation: &str, err: YardError) -> YardError {
    warn!("{} rejected: {}", operation, err);
    err
}

impl MovementLedger {
    /// Creates a new `MovementLedger`
    ///
    /// # Arguments
    ///
    /// * `store`: Directory and record storage
    /// * `fan_out`: Push delivery to live sessions
    /// * `settings`: The `ledger` section of the settings
    pub fn new(store: Arc<dyn YardStore>, fan_out: Arc<NotificationFanOut>, settings: LedgerSettings) -> Self {
        Self {
            docks: DockAllocator::new(Arc::clone(&store)),
            store,
            fan_out,
            locks: EntityLocks::default(),
            audit_mirror: None,
            settings,
        }
    }

    /// Mirrors every audit entry into `batcher` as well as the store.
    pub fn with_audit_mirror(mut self, batcher: Arc<AuditBatcher>) -> Self {
        self.audit_mirror = Some(batcher);
        self
    }

    // Transitions

    /// Registers a truck at the gate and opens its movement.
    pub async fn register_entry(&self, entry: GateEntry) -> YardResult<Movement> {
        let op = "register_entry";
        let truck = self.store.find_truck_by_plate(&entry.plate).await?
            .filter(|truck| truck.active)
            .ok_or_else(|| rejected(op, YardError::NotFound(format!("Truck {}", entry.plate.trim().to_uppercase()))))?;
        let driver = self.find_driver(&entry.driver_code).await.map_err(|e| rejected(op, e))?;

        let truck_guard = self.locks.trucks.acquire(truck.id).await;
        if let Some(open) = self.store.open_movement_for_truck(truck.id).await? {
            return Err(rejected(op, YardError::Conflict(format!(
                "Truck {} already has movement {} in state {}", truck.plate, open.id, open.state
            ))));
        }
        let now = local_now();
        let movement = self.store.insert_movement(Movement::at_gate(truck.id, now)).await?;
        self.audit(
            AuditEntry::new("GATE_ENTRY", Some(movement.id), Some(driver.id), format!("Truck {} entered at the gate", truck.plate), now)
                .with_payload(json!({ "plate": truck.plate, "driver_code": driver.code })),
        ).await?;
        drop(truck_guard);

        info!("Movement {} opened for truck {} -> {}", movement.id, truck.plate, movement.state);
        self.fan_out.send_to_role(Role::Logistics, &YardEvent::NewEntry {
            movement_id: movement.id,
            plate: truck.plate,
        }).await;
        Ok(movement)
    }

    /// Marks a truck as parked and ready to be called.
    pub async fn mark_available(&self, movement_id: MovementId) -> YardResult<Movement> {
        let op = "mark_available";
        let movement_guard = self.locks.movements.acquire(movement_id).await;
        let mut movement = self.load_movement(movement_id).await.map_err(|e| rejected(op, e))?;
        let now = local_now();
        movement.advance(MovementState::YardAvailable, now).map_err(|e| rejected(op, e))?;
        self.store.put_movement(movement.clone()).await?;
        self.audit(AuditEntry::new("YARD_AVAILABLE", Some(movement.id), None, "Truck available in the yard".to_string(), now)).await?;
        drop(movement_guard);

        info!("Movement {} -> {}", movement.id, movement.state);
        self.fan_out.broadcast(&YardEvent::TruckAvailable { movement_id: movement.id });
        Ok(movement)
    }

    /// Dispatch asks for a truck waiting in the yard.
    ///
    /// A dock given here is only recorded; it is not reserved until the assignment.
    pub async fn request(&self, request: TruckRequest) -> YardResult<Movement> {
        let op = "request";
        let movement_guard = self.locks.movements.acquire(request.movement_id).await;
        let mut movement = self.load_movement(request.movement_id).await.map_err(|e| rejected(op, e))?;
        movement.ensure_state(MovementState::Requested.predecessors()).map_err(|e| rejected(op, e))?;
        if let Some(dock_id) = request.dock_id {
            self.load_dock(dock_id).await.map_err(|e| rejected(op, e))?;
        }

        let now = local_now();
        movement.advance(MovementState::Requested, now)?;
        movement.requested_by = Some(request.requester.clone());
        if let Some(dock_id) = request.dock_id {
            movement.dock_id = Some(dock_id);
        }
        if let Some(priority) = request.priority {
            movement.priority = priority;
        }
        if let Some(notes) = request.notes {
            movement.notes = Some(notes);
        }
        self.store.put_movement(movement.clone()).await?;
        self.audit(
            AuditEntry::new("TRUCK_REQUESTED", Some(movement.id), None, format!("Requested by {}", request.requester), now)
                .with_payload(json!({ "priority": movement.priority, "dock_id": movement.dock_id })),
        ).await?;
        drop(movement_guard);

        info!("Movement {} -> {} ({})", movement.id, movement.state, movement.priority);
        self.fan_out.send_to_role(Role::Logistics, &YardEvent::TruckRequested {
            movement_id: movement.id,
            priority: movement.priority,
        }).await;
        Ok(movement)
    }

    /// Sends a truck to a dock and reserves the dock until the truck arrives.
    ///
    /// The dock keeps its stored `Free` state; the reservation alone keeps other assignments out.
    pub async fn assign_dock(&self, assignment: DockAssignmentRequest) -> YardResult<Movement> {
        let op = "assign_dock";
        let movement_guard = self.locks.movements.acquire(assignment.movement_id).await;
        let mut movement = self.load_movement(assignment.movement_id).await.map_err(|e| rejected(op, e))?;
        movement.ensure_state(MovementState::AssignedEnRoute.predecessors()).map_err(|e| rejected(op, e))?;
        let assigner = self.store.get_user(assignment.assigner_id).await?
            .ok_or_else(|| rejected(op, YardError::NotFound(format!("User {}", assignment.assigner_id))))?;
        let truck = self.load_truck(movement.truck_id).await?;

        let dock_guard = self.locks.docks.acquire(assignment.dock_id).await;
        let dock = self.load_dock(assignment.dock_id).await.map_err(|e| rejected(op, e))?;
        if !dock.accepts(truck.truck_type) {
            return Err(rejected(op, YardError::Conflict(format!(
                "Dock {} does not accept {} trucks", dock.number, truck.truck_type
            ))));
        }
        let dock = self.docks.reserve(dock.id, movement.id).await.map_err(|e| rejected(op, e))?;

        let now = local_now();
        movement.advance(MovementState::AssignedEnRoute, now)?;
        movement.dock_id = Some(dock.id);
        movement.assigned_by = Some(assigner.id);
        if let Some(notes) = &assignment.notes {
            movement.append_notes(notes);
        }
        if let Err(e) = self.store.put_movement(movement.clone()).await {
            if let Err(undo) = self.docks.vacate(dock.id, movement.id).await {
                warn!("Reservation of dock {} by movement {} left in place: {}", dock.number, movement.id, undo);
            }
            return Err(rejected(op, e));
        }
        if let Some(driver_id) = truck.driver_id {
            self.store.insert_notification(Notification::new(
                driver_id,
                Some(movement.id),
                DOCK_ASSIGNMENT,
                format!("Proceed to dock {}", dock.number),
                now,
            )).await?;
        }
        self.audit(
            AuditEntry::new("DOCK_ASSIGNED", Some(movement.id), Some(assigner.id), format!("Assigned to dock {}", dock.number), now)
                .with_payload(json!({ "dock_id": dock.id, "dock_number": dock.number })),
        ).await?;
        drop(dock_guard);
        drop(movement_guard);

        info!("Movement {} -> {} (dock {})", movement.id, movement.state, dock.number);
        match truck.driver_id {
            Some(driver_id) => {
                self.fan_out.send_to_user(driver_id, &YardEvent::DockAssignment {
                    movement_id: movement.id,
                    dock_number: dock.number,
                });
            }
            None => warn!("Truck {} has no driver, dock assignment of movement {} not pushed", truck.plate, movement.id),
        }
        Ok(movement)
    }

    /// The driver acknowledges the assignment. The state does not change.
    pub async fn confirm_driver(&self, movement_id: MovementId) -> YardResult<Movement> {
        let op = "confirm_driver";
        let movement_guard = self.locks.movements.acquire(movement_id).await;
        let mut movement = self.load_movement(movement_id).await.map_err(|e| rejected(op, e))?;
        movement.ensure_state(&[MovementState::AssignedEnRoute]).map_err(|e| rejected(op, e))?;

        let now = local_now();
        movement.timestamps.driver_confirmed_at = Some(now);
        movement.updated_at = Some(now);
        self.store.put_movement(movement.clone()).await?;
        if let Some(mut notification) = self.store.notification_for_movement(movement.id, DOCK_ASSIGNMENT).await? {
            notification.mark_confirmed(now);
            self.store.put_notification(notification).await?;
        }
        self.audit(AuditEntry::new("DRIVER_CONFIRMED", Some(movement.id), None, "Driver confirmed the assignment".to_string(), now)).await?;
        drop(movement_guard);

        info!("Movement {} confirmed by driver", movement.id);
        self.fan_out.send_to_role(Role::Logistics, &YardEvent::DriverConfirmed { movement_id: movement.id }).await;
        Ok(movement)
    }

    /// The truck reached its dock; the dock becomes occupied.
    pub async fn arrive_at_dock(&self, movement_id: MovementId) -> YardResult<Movement> {
        let op = "arrive_at_dock";
        let movement_guard = self.locks.movements.acquire(movement_id).await;
        let mut movement = self.load_movement(movement_id).await.map_err(|e| rejected(op, e))?;
        movement.ensure_state(MovementState::AtDock.predecessors()).map_err(|e| rejected(op, e))?;
        let dock_id = movement.dock_id
            .ok_or_else(|| rejected(op, YardError::Conflict(format!("Movement {} has no dock", movement.id))))?;

        let dock_guard = self.locks.docks.acquire(dock_id).await;
        let dock = self.docks.occupy(dock_id, movement.id).await.map_err(|e| rejected(op, e))?;
        let now = local_now();
        movement.advance(MovementState::AtDock, now)?;
        self.store.put_movement(movement.clone()).await?;
        self.audit(AuditEntry::new("AT_DOCK", Some(movement.id), None, format!("Truck at dock {}", dock.number), now)).await?;
        drop(dock_guard);
        drop(movement_guard);

        info!("Movement {} -> {} (dock {})", movement.id, movement.state, dock.number);
        self.fan_out.broadcast(&YardEvent::TruckAtDock { movement_id: movement.id });
        Ok(movement)
    }

    /// Loading finished; the driver is told to pull out.
    pub async fn mark_load_ready(&self, movement_id: MovementId) -> YardResult<Movement> {
        let op = "mark_load_ready";
        let movement_guard = self.locks.movements.acquire(movement_id).await;
        let mut movement = self.load_movement(movement_id).await.map_err(|e| rejected(op, e))?;
        let now = local_now();
        movement.advance(MovementState::LoadReady, now).map_err(|e| rejected(op, e))?;
        let dock_number = match movement.dock_id {
            Some(dock_id) => self.store.get_dock(dock_id).await?.map(|dock| dock.number),
            None => None,
        };
        let driver_id = self.truck_driver(movement.truck_id).await?;

        self.store.put_movement(movement.clone()).await?;
        if let Some(driver_id) = driver_id {
            let message = match dock_number {
                Some(number) => format!("Load ready! You may leave dock {}", number),
                None => "Load ready! You may leave the dock".to_string(),
            };
            self.store.insert_notification(Notification::new(driver_id, Some(movement.id), LOAD_READY, message, now)).await?;
        }
        self.audit(AuditEntry::new("LOAD_READY", Some(movement.id), None, "Load ready".to_string(), now)).await?;
        drop(movement_guard);

        info!("Movement {} -> {}", movement.id, movement.state);
        if let Some(driver_id) = driver_id {
            self.fan_out.send_to_user(driver_id, &YardEvent::LoadReady { movement_id: movement.id, dock_number });
        }
        Ok(movement)
    }

    /// The truck pulled out; its dock is free again.
    pub async fn depart_dock(&self, movement_id: MovementId) -> YardResult<Movement> {
        let op = "depart_dock";
        let movement_guard = self.locks.movements.acquire(movement_id).await;
        let mut movement = self.load_movement(movement_id).await.map_err(|e| rejected(op, e))?;
        movement.ensure_state(MovementState::DockExit.predecessors()).map_err(|e| rejected(op, e))?;

        let dock_guard = match movement.dock_id {
            Some(dock_id) => {
                let guard = self.locks.docks.acquire(dock_id).await;
                self.docks.release(dock_id).await.map_err(|e| rejected(op, e))?;
                Some(guard)
            }
            None => None,
        };
        let now = local_now();
        movement.advance(MovementState::DockExit, now)?;
        self.store.put_movement(movement.clone()).await?;
        self.audit(
            AuditEntry::new("DOCK_EXIT", Some(movement.id), None, "Truck left the dock".to_string(), now)
                .with_payload(json!({ "dock_id": movement.dock_id })),
        ).await?;
        drop(dock_guard);
        drop(movement_guard);

        info!("Movement {} -> {}", movement.id, movement.state);
        self.fan_out.broadcast(&YardEvent::DockFreed { movement_id: movement.id, dock_id: movement.dock_id });
        Ok(movement)
    }

    /// The truck leaves the distribution center.
    ///
    /// Only accepted after the dock exit unless `permissive_cd_exit` is set, in which case any state is accepted
    /// and a dock still held by the movement is let go.
    pub async fn exit_cd(&self, exit: CdExit) -> YardResult<Movement> {
        let op = "exit_cd";
        let movement_guard = self.locks.movements.acquire(exit.movement_id).await;
        let mut movement = self.load_movement(exit.movement_id).await.map_err(|e| rejected(op, e))?;
        let driver = self.find_driver(&exit.driver_code).await.map_err(|e| rejected(op, e))?;
        let now = local_now();

        if self.settings.permissive_cd_exit {
            let holds_dock = matches!(
                movement.state,
                MovementState::AssignedEnRoute | MovementState::AtDock | MovementState::LoadReady
            );
            if let (true, Some(dock_id)) = (holds_dock, movement.dock_id) {
                let _dock_guard = self.locks.docks.acquire(dock_id).await;
                self.docks.vacate(dock_id, movement.id).await?;
            }
            movement.enter(MovementState::CdExit, now);
        } else {
            movement.advance(MovementState::CdExit, now).map_err(|e| rejected(op, e))?;
        }
        self.store.put_movement(movement.clone()).await?;
        self.audit(AuditEntry::new("CD_EXIT", Some(movement.id), Some(driver.id), "Truck left the distribution center".to_string(), now)).await?;
        drop(movement_guard);

        info!("Movement {} -> {}", movement.id, movement.state);
        Ok(movement)
    }

    /// Takes a dock in or out of maintenance.
    pub async fn set_dock_maintenance(&self, dock_id: DockId, enabled: bool) -> YardResult<Dock> {
        let dock_guard = self.locks.docks.acquire(dock_id).await;
        let dock = self.docks.set_maintenance(dock_id, enabled).await
            .map_err(|e| rejected("set_dock_maintenance", e))?;
        self.audit(AuditEntry::new(
            "DOCK_MAINTENANCE",
            None,
            None,
            format!("Dock {} is {}", dock.number, dock.state),
            local_now(),
        )).await?;
        drop(dock_guard);
        Ok(dock)
    }

    // Reads

    pub async fn get_movement(&self, movement_id: MovementId) -> YardResult<MovementDetail> {
        let movement = self.load_movement(movement_id).await?;
        self.detail(movement).await
    }

    /// Lists movements, newest gate entry first.
    pub async fn list_movements(&self, query: MovementQuery) -> YardResult<Vec<MovementDetail>> {
        let state = query.state.as_deref().map(parse_state).transpose()?;
        let date = query.date.as_deref().map(parse_date).transpose()?;
        let filter = MovementFilter {
            state,
            date,
            limit: query.limit.unwrap_or(self.settings.movement_list_limit),
        };
        let movements = self.store.list_movements(&filter).await?;
        self.details(movements).await
    }

    /// Trucks waiting for a dock or on their way to one, each list oldest first.
    pub async fn active_queue(&self) -> YardResult<ActiveQueue> {
        let movements = self.store.all_movements().await?;
        let available = oldest_first(&movements, MovementState::YardAvailable, |m| m.timestamps.gate_in_at);
        let requested = oldest_first(&movements, MovementState::Requested, |m| m.timestamps.requested_at);
        let assigned = oldest_first(&movements, MovementState::AssignedEnRoute, |m| m.timestamps.assigned_at);

        Ok(ActiveQueue {
            available: self.details(available).await?,
            requested: self.details(requested).await?,
            assigned: self.details(assigned).await?,
        })
    }

    /// The latest movement of the driver's truck that has not left the distribution center.
    pub async fn driver_active_movement(&self, driver_id: UserId) -> YardResult<Option<MovementDetail>> {
        let truck = match self.store.find_truck_by_driver(driver_id).await? {
            Some(truck) => truck,
            None => return Ok(None),
        };
        let latest = self.store.all_movements().await?
            .into_iter()
            .filter(|m| m.truck_id == truck.id && m.state != MovementState::CdExit)
            .max_by_key(|m| (m.created_at, m.id));
        match latest {
            Some(movement) => Ok(Some(self.detail(movement).await?)),
            None => Ok(None),
        }
    }

    /// Every active dock with the movement holding it.
    pub async fn dock_summary(&self) -> YardResult<Vec<DockSummary>> {
        let now = local_now();
        let movements = self.store.all_movements().await?;
        let mut summaries = Vec::new();
        for dock in self.store.list_docks().await?.into_iter().filter(|dock| dock.active) {
            let mut current_movement = None;
            let mut occupied_minutes = None;
            if dock.state == DockState::Occupied {
                let holder = movements.iter()
                    .find(|m| m.dock_id == Some(dock.id) && m.state.is_at_dock())
                    .cloned();
                if let Some(movement) = holder {
                    occupied_minutes = minutes_between(movement.timestamps.at_dock_at, Some(now));
                    current_movement = Some(self.detail(movement).await?);
                }
            }
            summaries.push(DockSummary { dock, current_movement, occupied_minutes });
        }
        Ok(summaries)
    }

    pub async fn stats(&self) -> YardResult<YardStats> {
        let movements = self.store.all_movements().await?;
        let docks = self.store.list_docks().await?;
        Ok(compute_stats(&movements, &docks, local_now()))
    }

    /// A user's notifications, newest first.
    pub async fn notifications(&self, user_id: UserId, unread_only: bool) -> YardResult<Vec<Notification>> {
        self.store.notifications_for_user(user_id, unread_only, self.settings.notification_history_limit).await
    }

    pub async fn mark_read(&self, notification_id: NotificationId) -> YardResult<Notification> {
        let mut notification = self.store.get_notification(notification_id).await?
            .ok_or_else(|| YardError::NotFound(format!("Notification {}", notification_id)))?;
        notification.mark_read(local_now());
        self.store.put_notification(notification.clone()).await?;
        Ok(notification)
    }

    /// Code and PIN lookup. No session or token is created.
    pub async fn login(&self, code: &str, pin: &str) -> YardResult<Option<User>> {
        let user = self.store.authenticate(code, pin).await?;
        match &user {
            Some(user) => info!("User {} logged in as {}", user.code, user.role),
            None => warn!("Failed login for code {}", code),
        }
        Ok(user)
    }

    /// Audit entries of one movement, oldest first.
    pub async fn audit_trail(&self, movement_id: MovementId) -> YardResult<Vec<AuditEntry>> {
        self.load_movement(movement_id).await?;
        self.store.audit_for_movement(movement_id).await
    }

    // Helpers

    async fn audit(&self, entry: AuditEntry) -> YardResult<()> {
        let entry = self.store.append_audit(entry).await?;
        if let Some(mirror) = &self.audit_mirror {
            if let Err(e) = mirror.add_entry(entry).await {
                warn!("Audit mirror write failed: {}", e);
            }
        }
        Ok(())
    }

    async fn load_movement(&self, movement_id: MovementId) -> YardResult<Movement> {
        self.store.get_movement(movement_id).await?
            .ok_or_else(|| YardError::NotFound(format!("Movement {}", movement_id)))
    }

    async fn load_truck(&self, truck_id: TruckId) -> YardResult<Truck> {
        self.store.get_truck(truck_id).await?
            .ok_or_else(|| YardError::NotFound(format!("Truck {}", truck_id)))
    }

    async fn load_dock(&self, dock_id: DockId) -> YardResult<Dock> {
        self.store.get_dock(dock_id).await?
            .ok_or_else(|| YardError::NotFound(format!("Dock {}", dock_id)))
    }

    async fn find_driver(&self, code: &str) -> YardResult<User> {
        self.store.find_user_by_code(code).await?
            .filter(|user| user.role == Role::Driver)
            .ok_or_else(|| YardError::NotFound(format!("Driver {}", code)))
    }

    async fn truck_driver(&self, truck_id: TruckId) -> YardResult<Option<UserId>> {
        Ok(self.store.get_truck(truck_id).await?.and_then(|truck| truck.driver_id))
    }

    async fn detail(&self, movement: Movement) -> YardResult<MovementDetail> {
        let truck = self.store.get_truck(movement.truck_id).await?;
        let driver = match truck.as_ref().and_then(|truck| truck.driver_id) {
            Some(driver_id) => self.store.get_user(driver_id).await?,
            None => None,
        };
        let dock = match movement.dock_id {
            Some(dock_id) => self.store.get_dock(dock_id).await?,
            None => None,
        };
        let assigner = match movement.assigned_by {
            Some(user_id) => self.store.get_user(user_id).await?,
            None => None,
        };
        Ok(MovementDetail { movement, truck, driver, dock, assigner })
    }

    async fn details(&self, movements: Vec<Movement>) -> YardResult<Vec<MovementDetail>> {
        let mut details = Vec::with_capacity(movements.len());
        for movement in movements {
            details.push(self.detail(movement).await?);
        }
        Ok(details)
    }
}

fn oldest_first(
    movements: &[Movement],
    state: MovementState,
    key: impl Fn(&Movement) -> Option<NaiveDateTime>,
) -> Vec<Movement> {
    let mut selected: Vec<Movement> = movements.iter().filter(|m| m.state == state).cloned().collect();
    selected.sort_by_key(|m| (key(m), m.id));
    selected
}

fn parse_state(raw: &str) -> YardResult<MovementState> {
    serde_json::from_value(json!(raw.trim().to_uppercase()))
        .map_err(|_| YardError::ValidationError(format!("Unknown movement state '{}'", raw)))
}

fn parse_date(raw: &str) -> YardResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| YardError::ValidationError(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_state_names() {
        assert_eq!(parse_state("yard_available").unwrap(), MovementState::YardAvailable);
        assert_eq!(parse_state("CD_EXIT").unwrap(), MovementState::CdExit);
        assert!(matches!(parse_state("PARKED"), Err(YardError::ValidationError(_))));
    }

    #[test]
    fn parses_calendar_dates_only() {
        assert_eq!(parse_date("2024-03-09").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert!(matches!(parse_date("09/03/2024"), Err(YardError::ValidationError(_))));
        assert!(matches!(parse_date("2024-02-30"), Err(YardError::ValidationError(_))));
    }
}
