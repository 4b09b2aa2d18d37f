use async_trait::async_trait;
use crate::errors::YardResult;
use crate::models::{
    AuditEntry, Dock, DockAttributes, DockId, Movement, MovementFilter, MovementId, NewDock, NewTruck, NewUser,
    Notification, NotificationId, Role, Truck, TruckId, User, UserId,
};

/// The persistence collaborator of the ledger: trucks, docks and users plus the movement, notification
/// and audit records.
///
/// Every method is atomic on its own. Multi-record consistency is the ledger's job, which serializes
/// writers per movement, per dock and per truck before calling in here.
#[async_trait]
pub trait YardStore: Send + Sync {
    /// Registers a user. Fails with `Conflict` if the code is taken.
    async fn create_user(&self, user: NewUser) -> YardResult<User>;
    async fn get_user(&self, id: UserId) -> YardResult<Option<User>>;
    async fn find_user_by_code(&self, code: &str) -> YardResult<Option<User>>;
    /// Ids of every active user holding `role`, resolved at call time.
    async fn users_with_role(&self, role: Role) -> YardResult<Vec<UserId>>;
    /// Returns the active user matching both code and PIN.
    async fn authenticate(&self, code: &str, pin: &str) -> YardResult<Option<User>>;

    /// Registers a truck. The plate is stored upper case; fails with `Conflict` if it is taken.
    async fn create_truck(&self, truck: NewTruck) -> YardResult<Truck>;
    async fn get_truck(&self, id: TruckId) -> YardResult<Option<Truck>>;
    async fn find_truck_by_plate(&self, plate: &str) -> YardResult<Option<Truck>>;
    async fn find_truck_by_driver(&self, driver_id: UserId) -> YardResult<Option<Truck>>;
    async fn list_trucks(&self) -> YardResult<Vec<Truck>>;

    /// Registers a dock in the `Free` state. Fails with `Conflict` if the number is taken.
    async fn create_dock(&self, dock: NewDock) -> YardResult<Dock>;
    async fn get_dock(&self, id: DockId) -> YardResult<Option<Dock>>;
    /// All docks ordered by number.
    async fn list_docks(&self) -> YardResult<Vec<Dock>>;
    /// Replaces a dock record. Reserved for the dock allocator.
    async fn put_dock(&self, dock: Dock) -> YardResult<()>;
    async fn update_dock_attributes(&self, id: DockId, attributes: DockAttributes) -> YardResult<Dock>;

    /// Stores a new movement and returns it with its id assigned.
    async fn insert_movement(&self, movement: Movement) -> YardResult<Movement>;
    async fn get_movement(&self, id: MovementId) -> YardResult<Option<Movement>>;
    async fn put_movement(&self, movement: Movement) -> YardResult<()>;
    /// Movements matching the filter, newest gate entry first.
    async fn list_movements(&self, filter: &MovementFilter) -> YardResult<Vec<Movement>>;
    /// Every movement, in id order.
    async fn all_movements(&self) -> YardResult<Vec<Movement>>;
    /// The movement of this truck that is neither `DOCK_EXIT` nor `CD_EXIT`, if any.
    async fn open_movement_for_truck(&self, truck_id: TruckId) -> YardResult<Option<Movement>>;

    async fn insert_notification(&self, notification: Notification) -> YardResult<Notification>;
    async fn get_notification(&self, id: NotificationId) -> YardResult<Option<Notification>>;
    async fn put_notification(&self, notification: Notification) -> YardResult<()>;
    /// Notifications of a user, newest first.
    async fn notifications_for_user(&self, user_id: UserId, unread_only: bool, limit: usize) -> YardResult<Vec<Notification>>;
    /// The latest notification of `kind` attached to a movement.
    async fn notification_for_movement(&self, movement_id: MovementId, kind: &str) -> YardResult<Option<Notification>>;

    async fn append_audit(&self, entry: AuditEntry) -> YardResult<AuditEntry>;
    async fn audit_for_movement(&self, movement_id: MovementId) -> YardResult<Vec<AuditEntry>>;
}
