use axum::extract::State;
use axum::Json;
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use serde::{Deserialize, Serialize};
use crate::api::routes::AppState;
use crate::errors::YardResult;
use crate::models::{
    ActiveQueue, AuditEntry, CdExit, Dock, DockAssignmentRequest, DockId, DockSummary, GateEntry, Movement, MovementDetail,
    MovementId, MovementQuery, Notification, NotificationId, TruckRequest, User, UserId, YardStats,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub code: String,
    pub pin: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct MaintenanceRequest {
    pub enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct NotificationQuery {
    #[serde(default)]
    pub unread_only: bool,
}

pub(crate) async fn healthz_handler() -> &'static str {
    "ok"
}

pub(crate) async fn login_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> YardResult<Json<LoginResponse>> {
    let response = match state.ledger.login(&request.code, &request.pin).await? {
        Some(user) => LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            user: Some(user),
        },
        None => LoginResponse {
            success: false,
            message: "Wrong code or PIN".to_string(),
            user: None,
        },
    };
    Ok(Json(response))
}

pub(crate) async fn list_movements_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MovementQuery>,
) -> YardResult<Json<Vec<MovementDetail>>> {
    Ok(Json(state.ledger.list_movements(query).await?))
}

pub(crate) async fn active_queue_handler(State(state): State<AppState>) -> YardResult<Json<ActiveQueue>> {
    Ok(Json(state.ledger.active_queue().await?))
}

pub(crate) async fn get_movement_handler(
    State(state): State<AppState>,
    ApiPath(movement_id): ApiPath<MovementId>,
) -> YardResult<Json<MovementDetail>> {
    Ok(Json(state.ledger.get_movement(movement_id).await?))
}

pub(crate) async fn audit_trail_handler(
    State(state): State<AppState>,
    ApiPath(movement_id): ApiPath<MovementId>,
) -> YardResult<Json<Vec<AuditEntry>>> {
    Ok(Json(state.ledger.audit_trail(movement_id).await?))
}

pub(crate) async fn register_entry_handler(
    State(state): State<AppState>,
    ApiJson(entry): ApiJson<GateEntry>,
) -> YardResult<Json<Movement>> {
    Ok(Json(state.ledger.register_entry(entry).await?))
}

pub(crate) async fn mark_available_handler(
    State(state): State<AppState>,
    ApiPath(movement_id): ApiPath<MovementId>,
) -> YardResult<Json<Movement>> {
    Ok(Json(state.ledger.mark_available(movement_id).await?))
}

pub(crate) async fn request_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TruckRequest>,
) -> YardResult<Json<Movement>> {
    Ok(Json(state.ledger.request(request).await?))
}

pub(crate) async fn assign_dock_handler(
    State(state): State<AppState>,
    ApiJson(assignment): ApiJson<DockAssignmentRequest>,
) -> YardResult<Json<Movement>> {
    Ok(Json(state.ledger.assign_dock(assignment).await?))
}

pub(crate) async fn confirm_driver_handler(
    State(state): State<AppState>,
    ApiPath(movement_id): ApiPath<MovementId>,
) -> YardResult<Json<Movement>> {
    Ok(Json(state.ledger.confirm_driver(movement_id).await?))
}

pub(crate) async fn arrive_at_dock_handler(
    State(state): State<AppState>,
    ApiPath(movement_id): ApiPath<MovementId>,
) -> YardResult<Json<Movement>> {
    Ok(Json(state.ledger.arrive_at_dock(movement_id).await?))
}

pub(crate) async fn load_ready_handler(
    State(state): State<AppState>,
    ApiPath(movement_id): ApiPath<MovementId>,
) -> YardResult<Json<Movement>> {
    Ok(Json(state.ledger.mark_load_ready(movement_id).await?))
}

pub(crate) async fn depart_dock_handler(
    State(state): State<AppState>,
    ApiPath(movement_id): ApiPath<MovementId>,
) -> YardResult<Json<Movement>> {
    Ok(Json(state.ledger.depart_dock(movement_id).await?))
}

pub(crate) async fn exit_cd_handler(
    State(state): State<AppState>,
    ApiJson(exit): ApiJson<CdExit>,
) -> YardResult<Json<Movement>> {
    Ok(Json(state.ledger.exit_cd(exit).await?))
}

pub(crate) async fn dock_summary_handler(State(state): State<AppState>) -> YardResult<Json<Vec<DockSummary>>> {
    Ok(Json(state.ledger.dock_summary().await?))
}

pub(crate) async fn dock_maintenance_handler(
    State(state): State<AppState>,
    ApiPath(dock_id): ApiPath<DockId>,
    ApiJson(request): ApiJson<MaintenanceRequest>,
) -> YardResult<Json<Dock>> {
    Ok(Json(state.ledger.set_dock_maintenance(dock_id, request.enabled).await?))
}

pub(crate) async fn stats_handler(State(state): State<AppState>) -> YardResult<Json<YardStats>> {
    Ok(Json(state.ledger.stats().await?))
}

pub(crate) async fn notifications_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
    ApiQuery(query): ApiQuery<NotificationQuery>,
) -> YardResult<Json<Vec<Notification>>> {
    Ok(Json(state.ledger.notifications(user_id, query.unread_only).await?))
}

pub(crate) async fn mark_read_handler(
    State(state): State<AppState>,
    ApiPath(notification_id): ApiPath<NotificationId>,
) -> YardResult<Json<Notification>> {
    Ok(Json(state.ledger.mark_read(notification_id).await?))
}

pub(crate) async fn driver_active_movement_handler(
    State(state): State<AppState>,
    ApiPath(driver_id): ApiPath<UserId>,
) -> YardResult<Json<Option<MovementDetail>>> {
    Ok(Json(state.ledger.driver_active_movement(driver_id).await?))
}
