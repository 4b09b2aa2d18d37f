//! # Notification Fan-out

//! Delivers ledger events to live sessions: one user, every user of a role, or everyone. Delivery is
//! fire-and-forget. The ledger calls in here only after its writes are stored, and nothing returned from this
//! module can fail a transition.

use std::sync::Arc;
use tracing::{debug, warn};
use crate::models::{Role, UserId, YardEvent};
use crate::notifications::session_registry::SessionRegistry;
use crate::state_management::YardStore;

pub struct NotificationFanOut {
    registry: Arc<SessionRegistry>,
    store: Arc<dyn YardStore>,
}

impl NotificationFanOut {
    pub fn new(registry: Arc<SessionRegistry>, store: Arc<dyn YardStore>) -> Self {
        Self { registry, store }
    }

    /// Pushes to every session of one user and returns the number reached.
    pub fn send_to_user(&self, user_id: UserId, event: &YardEvent) -> usize {
        let reached = self.registry.send_to_user(user_id, &event.to_payload());
        debug!("{} for movement {} reached {} session(s) of user {}", event.event_type(), event.movement_id(), reached, user_id);
        reached
    }

    /// Pushes to every user holding `role`, resolved at call time.
    pub async fn send_to_role(&self, role: Role, event: &YardEvent) -> usize {
        let users = match self.store.users_with_role(role).await {
            Ok(users) => users,
            Err(e) => {
                warn!("Could not resolve role {} for {}: {}", role, event.event_type(), e);
                return 0;
            }
        };
        let payload = event.to_payload();
        let reached = users
            .into_iter()
            .map(|user_id| self.registry.send_to_user(user_id, &payload))
            .sum();
        debug!("{} for movement {} reached {} session(s) of role {}", event.event_type(), event.movement_id(), reached, role);
        reached
    }

    /// Pushes to every live session.
    pub fn broadcast(&self, event: &YardEvent) -> usize {
        let reached = self.registry.broadcast(&event.to_payload());
        debug!("{} for movement {} broadcast to {} session(s)", event.event_type(), event.movement_id(), reached);
        reached
    }
}
