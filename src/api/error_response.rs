use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;
use crate::errors::YardError;

impl YardError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            YardError::NotFound(_) => StatusCode::NOT_FOUND,
            YardError::Conflict(_) | YardError::InvalidTransition { .. } => StatusCode::CONFLICT,
            YardError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for YardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {:?}", self);
        }
        let body = Json(json!({
            "error": {
                "kind": self.kind(),
                "detail": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}
