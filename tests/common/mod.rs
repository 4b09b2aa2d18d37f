#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use yard_control::config::{LedgerSettings, SeedTruck, YardSeed};
use yard_control::errors::{YardError, YardResult};
use yard_control::ledger::MovementLedger;
use yard_control::models::{
    AuditEntry, Dock, DockAssignmentRequest, DockAttributes, DockId, GateEntry, Movement, MovementFilter, MovementId,
    NewDock, NewTruck, NewUser, Notification, NotificationId, Role, Truck, TruckId, TruckType, User, UserId,
};
use yard_control::notifications::{NotificationFanOut, SessionRegistry};
use yard_control::state_management::{MemoryStore, YardStore};

pub struct TestYard {
    pub store: Arc<dyn YardStore>,
    pub sessions: Arc<SessionRegistry>,
    pub ledger: Arc<MovementLedger>,
}

fn seed_truck(plate: &str, truck_type: TruckType, driver_code: &str) -> SeedTruck {
    SeedTruck {
        plate: plate.to_string(),
        truck_type,
        driver_code: Some(driver_code.to_string()),
        capacity: Some("20t".to_string()),
    }
}

pub fn create_mock_seed() -> YardSeed {
    YardSeed {
        users: vec![
            NewUser::new("LOG01".into(), "Logistics".into(), "1234".into(), Role::Logistics, None),
            NewUser::new("DSP01".into(), "Dispatch".into(), "1234".into(), Role::Dispatch, None),
            NewUser::new("CH001".into(), "Driver One".into(), "1111".into(), Role::Driver, None),
            NewUser::new("CH002".into(), "Driver Two".into(), "2222".into(), Role::Driver, None),
            NewUser::new("CH003".into(), "Driver Three".into(), "3333".into(), Role::Driver, None),
        ],
        trucks: vec![
            seed_truck("ABC123", TruckType::Dry, "CH001"),
            seed_truck("XYZ789", TruckType::Dry, "CH002"),
            seed_truck("DEF456", TruckType::Mixed, "CH003"),
        ],
        docks: vec![
            NewDock::new(1, Some("Dock 1".into()), None),
            NewDock::new(2, Some("Dock 2".into()), None),
            NewDock::new(3, Some("Dock 3".into()), None),
            NewDock::new(4, Some("Cold dock".into()), Some(TruckType::Refrigerated)),
        ],
    }
}

async fn create_mock_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.initialize_from_settings(&create_mock_seed()).await.unwrap();
    store
}

pub async fn create_test_yard_with(settings: LedgerSettings) -> TestYard {
    create_test_yard_on(Arc::new(create_mock_store().await), settings)
}

/// A yard whose movement writes can be made to fail on demand.
pub async fn create_flaky_yard() -> (TestYard, Arc<FlakyStore>) {
    let flaky = Arc::new(FlakyStore {
        inner: create_mock_store().await,
        fail_movement_writes: AtomicBool::new(false),
    });
    let yard = create_test_yard_on(Arc::clone(&flaky) as Arc<dyn YardStore>, LedgerSettings::default());
    (yard, flaky)
}

fn create_test_yard_on(store: Arc<dyn YardStore>, settings: LedgerSettings) -> TestYard {
    let sessions = Arc::new(SessionRegistry::new());
    let fan_out = Arc::new(NotificationFanOut::new(Arc::clone(&sessions), Arc::clone(&store)));
    let ledger = Arc::new(MovementLedger::new(Arc::clone(&store), fan_out, settings));
    TestYard { store, sessions, ledger }
}

pub async fn create_test_yard() -> TestYard {
    create_test_yard_with(LedgerSettings::default()).await
}

impl TestYard {
    pub async fn user(&self, code: &str) -> User {
        self.store.find_user_by_code(code).await.unwrap().unwrap()
    }

    pub async fn dock(&self, number: i32) -> Dock {
        self.store.list_docks().await.unwrap()
            .into_iter()
            .find(|dock| dock.number == number)
            .unwrap()
    }

    pub async fn movement(&self, id: i64) -> Movement {
        self.store.get_movement(id).await.unwrap().unwrap()
    }

    pub async fn enter(&self, plate: &str, driver_code: &str) -> Movement {
        self.ledger.register_entry(GateEntry::new(plate.into(), driver_code.into())).await.unwrap()
    }

    /// Registers the truck and parks it in the yard.
    pub async fn available(&self, plate: &str, driver_code: &str) -> Movement {
        let movement = self.enter(plate, driver_code).await;
        self.ledger.mark_available(movement.id).await.unwrap()
    }

    pub async fn assign(&self, movement_id: i64, dock_number: i32) -> YardResult<Movement> {
        let dock = self.dock(dock_number).await;
        let assigner = self.user("LOG01").await;
        self.ledger.assign_dock(DockAssignmentRequest::new(movement_id, dock.id, assigner.id, None)).await
    }

    /// Brings the truck all the way to the dock.
    pub async fn at_dock(&self, plate: &str, driver_code: &str, dock_number: i32) -> Movement {
        let movement = self.available(plate, driver_code).await;
        self.assign(movement.id, dock_number).await.unwrap();
        self.ledger.arrive_at_dock(movement.id).await.unwrap()
    }
}

/// Delegates to a seeded `MemoryStore`; `put_movement` fails while `fail_movement_writes` is set.
pub struct FlakyStore {
    inner: MemoryStore,
    fail_movement_writes: AtomicBool,
}

impl FlakyStore {
    pub fn fail_movement_writes(&self, enabled: bool) {
        self.fail_movement_writes.store(enabled, Ordering::SeqCst);
    }
}

#[async_trait]
impl YardStore for FlakyStore {
    async fn create_user(&self, user: NewUser) -> YardResult<User> { self.inner.create_user(user).await }
    async fn get_user(&self, id: UserId) -> YardResult<Option<User>> { self.inner.get_user(id).await }
    async fn find_user_by_code(&self, code: &str) -> YardResult<Option<User>> { self.inner.find_user_by_code(code).await }
    async fn users_with_role(&self, role: Role) -> YardResult<Vec<UserId>> { self.inner.users_with_role(role).await }
    async fn authenticate(&self, code: &str, pin: &str) -> YardResult<Option<User>> { self.inner.authenticate(code, pin).await }

    async fn create_truck(&self, truck: NewTruck) -> YardResult<Truck> { self.inner.create_truck(truck).await }
    async fn get_truck(&self, id: TruckId) -> YardResult<Option<Truck>> { self.inner.get_truck(id).await }
    async fn find_truck_by_plate(&self, plate: &str) -> YardResult<Option<Truck>> { self.inner.find_truck_by_plate(plate).await }
    async fn find_truck_by_driver(&self, driver_id: UserId) -> YardResult<Option<Truck>> { self.inner.find_truck_by_driver(driver_id).await }
    async fn list_trucks(&self) -> YardResult<Vec<Truck>> { self.inner.list_trucks().await }

    async fn create_dock(&self, dock: NewDock) -> YardResult<Dock> { self.inner.create_dock(dock).await }
    async fn get_dock(&self, id: DockId) -> YardResult<Option<Dock>> { self.inner.get_dock(id).await }
    async fn list_docks(&self) -> YardResult<Vec<Dock>> { self.inner.list_docks().await }
    async fn put_dock(&self, dock: Dock) -> YardResult<()> { self.inner.put_dock(dock).await }
    async fn update_dock_attributes(&self, id: DockId, attributes: DockAttributes) -> YardResult<Dock> {
        self.inner.update_dock_attributes(id, attributes).await
    }

    async fn insert_movement(&self, movement: Movement) -> YardResult<Movement> { self.inner.insert_movement(movement).await }
    async fn get_movement(&self, id: MovementId) -> YardResult<Option<Movement>> { self.inner.get_movement(id).await }
    async fn put_movement(&self, movement: Movement) -> YardResult<()> {
        if self.fail_movement_writes.load(Ordering::SeqCst) {
            return Err(YardError::DatabaseError(sqlx_oldapi::Error::PoolTimedOut));
        }
        self.inner.put_movement(movement).await
    }
    async fn list_movements(&self, filter: &MovementFilter) -> YardResult<Vec<Movement>> { self.inner.list_movements(filter).await }
    async fn all_movements(&self) -> YardResult<Vec<Movement>> { self.inner.all_movements().await }
    async fn open_movement_for_truck(&self, truck_id: TruckId) -> YardResult<Option<Movement>> {
        self.inner.open_movement_for_truck(truck_id).await
    }

    async fn insert_notification(&self, notification: Notification) -> YardResult<Notification> {
        self.inner.insert_notification(notification).await
    }
    async fn get_notification(&self, id: NotificationId) -> YardResult<Option<Notification>> { self.inner.get_notification(id).await }
    async fn put_notification(&self, notification: Notification) -> YardResult<()> { self.inner.put_notification(notification).await }
    async fn notifications_for_user(&self, user_id: UserId, unread_only: bool, limit: usize) -> YardResult<Vec<Notification>> {
        self.inner.notifications_for_user(user_id, unread_only, limit).await
    }
    async fn notification_for_movement(&self, movement_id: MovementId, kind: &str) -> YardResult<Option<Notification>> {
        self.inner.notification_for_movement(movement_id, kind).await
    }

    async fn append_audit(&self, entry: AuditEntry) -> YardResult<AuditEntry> { self.inner.append_audit(entry).await }
    async fn audit_for_movement(&self, movement_id: MovementId) -> YardResult<Vec<AuditEntry>> {
        self.inner.audit_for_movement(movement_id).await
    }
}
