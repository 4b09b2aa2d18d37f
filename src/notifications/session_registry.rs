use std::sync::atomic::{AtomicU64, Ordering};
use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::debug;
use crate::models::UserId;

pub type SessionId = u64;

/// One live push connection of a user.
struct Session {
    id: SessionId,
    sender: mpsc::UnboundedSender<Value>,
}

/// Live push sessions, bucketed by user.
///
/// A bucket is only touched under its shard lock, so registering, removing and delivering never interleave
/// within one user's list. Nothing here is persisted; a reconnecting client simply registers again.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<UserId, Vec<Session>>,
    next_id: AtomicU64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a session for `user_id` and returns the receiving end of its event stream.
    pub fn register(&self, user_id: UserId) -> (SessionId, mpsc::UnboundedReceiver<Value>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.sessions.entry(user_id).or_default().push(Session { id, sender });
        debug!("Session {} registered for user {}", id, user_id);
        (id, receiver)
    }

    /// Removes one session. Empty buckets are dropped.
    pub fn unregister(&self, user_id: UserId, session_id: SessionId) {
        let now_empty = match self.sessions.get_mut(&user_id) {
            Some(mut bucket) => {
                bucket.retain(|session| session.id != session_id);
                bucket.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.sessions.remove_if(&user_id, |_, bucket| bucket.is_empty());
        }
        debug!("Session {} unregistered for user {}", session_id, user_id);
    }

    pub fn session_count(&self, user_id: UserId) -> usize {
        self.sessions.get(&user_id).map_or(0, |bucket| bucket.len())
    }

    pub fn total_sessions(&self) -> usize {
        self.sessions.iter().map(|bucket| bucket.len()).sum()
    }

    /// Pushes `payload` to every session of one user. Returns how many accepted it.
    ///
    /// A closed session is skipped for this call only; its socket task unregisters it.
    pub fn send_to_user(&self, user_id: UserId, payload: &Value) -> usize {
        match self.sessions.get(&user_id) {
            Some(bucket) => deliver(user_id, &bucket, payload),
            None => 0,
        }
    }

    /// Pushes `payload` to every live session.
    pub fn broadcast(&self, payload: &Value) -> usize {
        self.sessions
            .iter()
            .map(|bucket| deliver(*bucket.key(), bucket.value(), payload))
            .sum()
    }
}

fn deliver(user_id: UserId, bucket: &[Session], payload: &Value) -> usize {
    bucket
        .iter()
        .filter(|session| match session.sender.send(payload.clone()) {
            Ok(()) => true,
            Err(_) => {
                debug!("Session {} of user {} is closed, skipping", session.id, user_id);
                false
            }
        })
        .count()
}
