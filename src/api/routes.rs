use std::sync::Arc;
use axum::routing::{get, post};
use axum::Router;
use crate::api::{handlers, ws};
use crate::ledger::MovementLedger;
use crate::notifications::SessionRegistry;

/// Shared state of every handler.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<MovementLedger>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(ledger: Arc<MovementLedger>, sessions: Arc<SessionRegistry>) -> Self {
        Self { ledger, sessions }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz_handler))
        .route("/api/auth/login", post(handlers::login_handler))
        .route("/api/movements", get(handlers::list_movements_handler))
        .route("/api/movements/active", get(handlers::active_queue_handler))
        .route("/api/movements/entry", post(handlers::register_entry_handler))
        .route("/api/movements/request", post(handlers::request_handler))
        .route("/api/movements/assign", post(handlers::assign_dock_handler))
        .route("/api/movements/exit", post(handlers::exit_cd_handler))
        .route("/api/movements/:id", get(handlers::get_movement_handler))
        .route("/api/movements/:id/audit", get(handlers::audit_trail_handler))
        .route("/api/movements/:id/available", post(handlers::mark_available_handler))
        .route("/api/movements/:id/confirm-driver", post(handlers::confirm_driver_handler))
        .route("/api/movements/:id/at-dock", post(handlers::arrive_at_dock_handler))
        .route("/api/movements/:id/load-ready", post(handlers::load_ready_handler))
        .route("/api/movements/:id/depart-dock", post(handlers::depart_dock_handler))
        .route("/api/docks/summary", get(handlers::dock_summary_handler))
        .route("/api/docks/:id/maintenance", post(handlers::dock_maintenance_handler))
        .route("/api/stats", get(handlers::stats_handler))
        .route("/api/notifications/:id", get(handlers::notifications_handler))
        .route("/api/notifications/:id/read", post(handlers::mark_read_handler))
        .route("/api/drivers/:driver_id/active-movement", get(handlers::driver_active_movement_handler))
        .route("/ws/:user_id", get(ws::ws_handler))
        .with_state(state)
}
