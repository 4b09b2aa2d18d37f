pub mod session_registry;
pub mod fan_out;

pub use session_registry::{SessionId, SessionRegistry};
pub use fan_out::NotificationFanOut;
