pub mod entity_locks;
pub mod dock_allocator;
pub mod movement_ledger;

pub use entity_locks::{EntityLocks, LockTable};
pub use dock_allocator::DockAllocator;
pub use movement_ledger::MovementLedger;
