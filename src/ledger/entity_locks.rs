use std::sync::Arc;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per entity id, created on first use and dropped once nobody holds or waits for it.
///
/// Holding the guard serializes every writer of that entity. Different ids never contend.
#[derive(Default)]
pub struct LockTable {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl LockTable {
    pub fn new() -> Self {
        Self { locks: DashMap::new() }
    }

    /// Waits for exclusive access to `id`.
    pub async fn acquire(&self, id: i64) -> EntityGuard<'_> {
        // The shard lock is released before awaiting.
        let lock = self.locks
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        EntityGuard {
            table: self,
            id,
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Number of ids currently held or awaited.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Exclusive access to one entity id. Unlocks on drop.
pub struct EntityGuard<'a> {
    table: &'a LockTable,
    id: i64,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for EntityGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // A waiter holds its own clone, so a count of one means only the table is left.
        self.table.locks.remove_if(&self.id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

/// Lock tables of the three entities a transition can touch.
///
/// Acquire in the order truck, movement, dock.
#[derive(Default)]
pub struct EntityLocks {
    pub trucks: LockTable,
    pub movements: LockTable,
    pub docks: LockTable,
}
