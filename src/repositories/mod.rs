pub mod audit_log_repository;
pub mod repository_trait;

pub use audit_log_repository::*;
pub use repository_trait::*;
