//! # Notification and Audit Records

//! Persisted side effects of ledger transitions. A `Notification` is the durable copy of a directive sent to one
//! user; it is written before any live push is attempted and is only mutated by its recipient. An `AuditEntry`
//! is an append-only trace of what the ledger did.

#![allow(non_snake_case)]

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx_oldapi::FromRow;
use crate::models::idirectory::{MovementId, NotificationId, UserId};

/// A directive delivered to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub movement_id: Option<MovementId>,
    /// Type tag, e.g. `dock_assignment` or `load_ready`.
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub read: bool,
    pub read_at: Option<NaiveDateTime>,
    pub confirmed: bool,
    pub confirmed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl Notification {
    /// Builds an unread, unconfirmed notification. The id is filled in by the store.
    pub fn new(user_id: UserId, movement_id: Option<MovementId>, kind: &str, message: String, now: NaiveDateTime) -> Self {
        Notification {
            id: 0,
            user_id,
            movement_id,
            kind: kind.to_string(),
            message,
            read: false,
            read_at: None,
            confirmed: false,
            confirmed_at: None,
            created_at: now,
        }
    }

    pub fn mark_read(&mut self, now: NaiveDateTime) {
        self.read = true;
        self.read_at = Some(now);
    }

    pub fn mark_confirmed(&mut self, now: NaiveDateTime) {
        self.confirmed = true;
        self.confirmed_at = Some(now);
    }
}

/// An append-only record of a ledger action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub movement_id: Option<MovementId>,
    pub user_id: Option<UserId>,
    /// Action tag, e.g. `GATE_ENTRY`.
    pub action: String,
    pub description: Option<String>,
    pub payload: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
}

impl AuditEntry {
    pub fn new(action: &str, movement_id: Option<MovementId>, user_id: Option<UserId>, description: String, now: NaiveDateTime) -> Self {
        AuditEntry {
            id: 0,
            movement_id,
            user_id,
            action: action.to_string(),
            description: Some(description),
            payload: None,
            created_at: now,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Row shape of the audit mirror table
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AuditRow {
    /// The date and time the action was applied
    pub LOG_DTTM: NaiveDateTime,
    /// The movement the action applies to, if any
    pub MOVEMENT_ID: Option<i64>,
    /// The user that triggered the action, if known
    pub ID_USER: Option<i64>,
    /// The action tag
    pub ACTION: String,
    /// Human readable description
    pub DESCRIPTION: Option<String>,
    /// Serialized JSON payload
    pub PAYLOAD: Option<String>,
}

impl AuditRow {
    /// Flattens an `AuditEntry` into its table row
    pub fn from_entry(entry: &AuditEntry) -> Self {
        AuditRow {
            LOG_DTTM: entry.created_at,
            MOVEMENT_ID: entry.movement_id,
            ID_USER: entry.user_id,
            ACTION: entry.action.clone(),
            DESCRIPTION: entry.description.clone(),
            PAYLOAD: entry.payload.as_ref().map(|payload| payload.to_string()),
        }
    }
}
