use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use crate::config::YardSeed;
use crate::errors::{YardError, YardResult};
use crate::models::{
    local_now, AuditEntry, Dock, DockAttributes, DockId, DockState, Movement, MovementFilter, MovementId, NewDock,
    NewTruck, NewUser, Notification, NotificationId, Role, Truck, TruckId, User, UserId,
};
use crate::state_management::yard_store::YardStore;

/// In-process `YardStore`. Each table sits behind its own lock; ids come from per-table sequences.
pub struct MemoryStore {
    users: RwLock<BTreeMap<UserId, User>>,
    trucks: RwLock<BTreeMap<TruckId, Truck>>,
    docks: RwLock<BTreeMap<DockId, Dock>>,
    movements: RwLock<BTreeMap<MovementId, Movement>>,
    notifications: RwLock<BTreeMap<NotificationId, Notification>>,
    audit: RwLock<Vec<AuditEntry>>,
    user_seq: AtomicI64,
    truck_seq: AtomicI64,
    dock_seq: AtomicI64,
    movement_seq: AtomicI64,
    notification_seq: AtomicI64,
    audit_seq: AtomicI64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            trucks: RwLock::new(BTreeMap::new()),
            docks: RwLock::new(BTreeMap::new()),
            movements: RwLock::new(BTreeMap::new()),
            notifications: RwLock::new(BTreeMap::new()),
            audit: RwLock::new(Vec::new()),
            user_seq: AtomicI64::new(1),
            truck_seq: AtomicI64::new(1),
            dock_seq: AtomicI64::new(1),
            movement_seq: AtomicI64::new(1),
            notification_seq: AtomicI64::new(1),
            audit_seq: AtomicI64::new(1),
        }
    }

    /// Loads users, docks and trucks from the `yard` section of the settings.
    ///
    /// Users go first so trucks can resolve their driver by login code.
    pub async fn initialize_from_settings(&self, seed: &YardSeed) -> YardResult<()> {
        for user in &seed.users {
            self.create_user(user.clone()).await?;
        }
        for dock in &seed.docks {
            self.create_dock(dock.clone()).await?;
        }
        for truck in &seed.trucks {
            let driver_id = match &truck.driver_code {
                Some(code) => Some(
                    self.find_user_by_code(code).await?
                        .ok_or_else(|| YardError::NotFound(format!("Driver {} for truck {}", code, truck.plate)))?
                        .id,
                ),
                None => None,
            };
            self.create_truck(NewTruck::new(truck.plate.clone(), truck.truck_type, driver_id, truck.capacity.clone())).await?;
        }
        info!(
            "Directory seeded: {} users, {} docks, {} trucks",
            seed.users.len(), seed.docks.len(), seed.trucks.len()
        );
        Ok(())
    }
}

fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

#[async_trait]
impl YardStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> YardResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.code == user.code) {
            return Err(YardError::Conflict(format!("User code {} already exists", user.code)));
        }
        let user = User {
            id: self.user_seq.fetch_add(1, Ordering::SeqCst),
            code: user.code,
            name: user.name,
            pin: user.pin,
            role: user.role,
            phone: user.phone,
            active: true,
            created_at: local_now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> YardResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_user_by_code(&self, code: &str) -> YardResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.code == code).cloned())
    }

    async fn users_with_role(&self, role: Role) -> YardResult<Vec<UserId>> {
        let users = self.users.read().await;
        Ok(users.values()
            .filter(|user| user.role == role && user.active)
            .map(|user| user.id)
            .collect())
    }

    async fn authenticate(&self, code: &str, pin: &str) -> YardResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values()
            .find(|user| user.code == code && user.pin == pin && user.active)
            .cloned())
    }

    async fn create_truck(&self, truck: NewTruck) -> YardResult<Truck> {
        let plate = normalize_plate(&truck.plate);
        let mut trucks = self.trucks.write().await;
        if trucks.values().any(|existing| existing.plate == plate) {
            return Err(YardError::Conflict(format!("Plate {} already exists", plate)));
        }
        let truck = Truck {
            id: self.truck_seq.fetch_add(1, Ordering::SeqCst),
            plate,
            truck_type: truck.truck_type,
            driver_id: truck.driver_id,
            capacity: truck.capacity,
            active: true,
            created_at: local_now(),
        };
        trucks.insert(truck.id, truck.clone());
        Ok(truck)
    }

    async fn get_truck(&self, id: TruckId) -> YardResult<Option<Truck>> {
        Ok(self.trucks.read().await.get(&id).cloned())
    }

    async fn find_truck_by_plate(&self, plate: &str) -> YardResult<Option<Truck>> {
        let plate = normalize_plate(plate);
        let trucks = self.trucks.read().await;
        Ok(trucks.values().find(|truck| truck.plate == plate).cloned())
    }

    async fn find_truck_by_driver(&self, driver_id: UserId) -> YardResult<Option<Truck>> {
        let trucks = self.trucks.read().await;
        Ok(trucks.values().find(|truck| truck.driver_id == Some(driver_id)).cloned())
    }

    async fn list_trucks(&self) -> YardResult<Vec<Truck>> {
        Ok(self.trucks.read().await.values().cloned().collect())
    }

    async fn create_dock(&self, dock: NewDock) -> YardResult<Dock> {
        let mut docks = self.docks.write().await;
        if docks.values().any(|existing| existing.number == dock.number) {
            return Err(YardError::Conflict(format!("Dock number {} already exists", dock.number)));
        }
        let dock = Dock {
            id: self.dock_seq.fetch_add(1, Ordering::SeqCst),
            number: dock.number,
            name: dock.name,
            permitted_type: dock.permitted_type,
            state: DockState::Free,
            reserved_by: None,
            active: true,
            created_at: local_now(),
        };
        docks.insert(dock.id, dock.clone());
        Ok(dock)
    }

    async fn get_dock(&self, id: DockId) -> YardResult<Option<Dock>> {
        Ok(self.docks.read().await.get(&id).cloned())
    }

    async fn list_docks(&self) -> YardResult<Vec<Dock>> {
        let mut docks: Vec<Dock> = self.docks.read().await.values().cloned().collect();
        docks.sort_by_key(|dock| dock.number);
        Ok(docks)
    }

    async fn put_dock(&self, dock: Dock) -> YardResult<()> {
        let mut docks = self.docks.write().await;
        match docks.get_mut(&dock.id) {
            Some(existing) => {
                *existing = dock;
                Ok(())
            }
            None => Err(YardError::NotFound(format!("Dock {}", dock.id))),
        }
    }

    async fn update_dock_attributes(&self, id: DockId, attributes: DockAttributes) -> YardResult<Dock> {
        let mut docks = self.docks.write().await;
        let dock = docks.get_mut(&id)
            .ok_or_else(|| YardError::NotFound(format!("Dock {}", id)))?;
        if let Some(name) = attributes.name {
            dock.name = Some(name);
        }
        if let Some(permitted_type) = attributes.permitted_type {
            dock.permitted_type = permitted_type;
        }
        if let Some(active) = attributes.active {
            dock.active = active;
        }
        Ok(dock.clone())
    }

    async fn insert_movement(&self, mut movement: Movement) -> YardResult<Movement> {
        movement.id = self.movement_seq.fetch_add(1, Ordering::SeqCst);
        self.movements.write().await.insert(movement.id, movement.clone());
        Ok(movement)
    }

    async fn get_movement(&self, id: MovementId) -> YardResult<Option<Movement>> {
        Ok(self.movements.read().await.get(&id).cloned())
    }

    async fn put_movement(&self, movement: Movement) -> YardResult<()> {
        let mut movements = self.movements.write().await;
        match movements.get_mut(&movement.id) {
            Some(existing) => {
                *existing = movement;
                Ok(())
            }
            None => Err(YardError::NotFound(format!("Movement {}", movement.id))),
        }
    }

    async fn list_movements(&self, filter: &MovementFilter) -> YardResult<Vec<Movement>> {
        let movements = self.movements.read().await;
        let mut matching: Vec<Movement> = movements.values()
            .filter(|movement| filter.matches(movement))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.timestamps.gate_in_at.cmp(&a.timestamps.gate_in_at).then(b.id.cmp(&a.id)));
        matching.truncate(filter.limit);
        Ok(matching)
    }

    async fn all_movements(&self) -> YardResult<Vec<Movement>> {
        Ok(self.movements.read().await.values().cloned().collect())
    }

    async fn open_movement_for_truck(&self, truck_id: TruckId) -> YardResult<Option<Movement>> {
        let movements = self.movements.read().await;
        Ok(movements.values()
            .find(|movement| movement.truck_id == truck_id && movement.state.is_open())
            .cloned())
    }

    async fn insert_notification(&self, mut notification: Notification) -> YardResult<Notification> {
        notification.id = self.notification_seq.fetch_add(1, Ordering::SeqCst);
        self.notifications.write().await.insert(notification.id, notification.clone());
        Ok(notification)
    }

    async fn get_notification(&self, id: NotificationId) -> YardResult<Option<Notification>> {
        Ok(self.notifications.read().await.get(&id).cloned())
    }

    async fn put_notification(&self, notification: Notification) -> YardResult<()> {
        let mut notifications = self.notifications.write().await;
        match notifications.get_mut(&notification.id) {
            Some(existing) => {
                *existing = notification;
                Ok(())
            }
            None => Err(YardError::NotFound(format!("Notification {}", notification.id))),
        }
    }

    async fn notifications_for_user(&self, user_id: UserId, unread_only: bool, limit: usize) -> YardResult<Vec<Notification>> {
        let notifications = self.notifications.read().await;
        Ok(notifications.values()
            .rev()
            .filter(|notification| notification.user_id == user_id)
            .filter(|notification| !unread_only || !notification.read)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn notification_for_movement(&self, movement_id: MovementId, kind: &str) -> YardResult<Option<Notification>> {
        let notifications = self.notifications.read().await;
        Ok(notifications.values()
            .filter(|notification| notification.movement_id == Some(movement_id) && notification.kind == kind)
            .max_by_key(|notification| notification.id)
            .cloned())
    }

    async fn append_audit(&self, mut entry: AuditEntry) -> YardResult<AuditEntry> {
        entry.id = self.audit_seq.fetch_add(1, Ordering::SeqCst);
        self.audit.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn audit_for_movement(&self, movement_id: MovementId) -> YardResult<Vec<AuditEntry>> {
        let audit = self.audit.read().await;
        Ok(audit.iter()
            .filter(|entry| entry.movement_id == Some(movement_id))
            .cloned()
            .collect())
    }
}
