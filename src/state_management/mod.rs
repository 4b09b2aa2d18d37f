pub mod yard_store;
pub mod memory_store;
pub mod audit_batcher;
pub mod lifecycle;

pub use yard_store::YardStore;
pub use memory_store::MemoryStore;
pub use audit_batcher::{AuditBatcher, AuditWriter};
pub use lifecycle::ServiceLifecycle;
