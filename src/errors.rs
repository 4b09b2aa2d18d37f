/// # Yard Control Errors
/// This module defines the `YardError` enum, which encapsulates every failure the yard-control service can report.
/// The first four variants are the domain kinds surfaced to callers of a transition; the remaining ones belong to
/// the infrastructure around the ledger (database mirror, configuration, file system).


use thiserror::Error;
use sqlx_oldapi::Error as SqlxError;
use std::io;
use crate::models::MovementState;

#[derive(Error, Debug)]
pub enum YardError {
    /// A referenced truck, dock, user, movement or notification does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A uniqueness rule or an exclusive dock claim was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The movement is not in a state that allows the requested transition.
    #[error("Invalid transition for movement {movement_id}: current state is {current}, expected {expected}")]
    InvalidTransition {
        movement_id: i64,
        current: MovementState,
        expected: String,
    },

    /// Malformed caller input, e.g. an unparsable date filter.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Represents errors originating from database interactions.
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    /// Represents errors arising from misconfigurations or invalid settings.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl YardError {
    /// Builds an `InvalidTransition` from the expected states of an operation.
    pub fn invalid_transition(movement_id: i64, current: MovementState, expected: &[MovementState]) -> Self {
        let expected = expected
            .iter()
            .map(|state| state.to_string())
            .collect::<Vec<_>>()
            .join(" or ");
        YardError::InvalidTransition { movement_id, current, expected }
    }

    /// Short machine-readable tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            YardError::NotFound(_) => "not_found",
            YardError::Conflict(_) => "conflict",
            YardError::InvalidTransition { .. } => "invalid_transition",
            YardError::ValidationError(_) => "validation_error",
            YardError::DatabaseError(_) => "database_error",
            YardError::ConfigError(_) => "config_error",
            YardError::IoError(_) => "io_error",
        }
    }
}

impl From<config::ConfigError> for YardError {
    fn from(err: config::ConfigError) -> Self {
        YardError::ConfigError(err.to_string())
    }
}

pub type YardResult<T> = Result<T, YardError>;
