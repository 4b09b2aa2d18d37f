//! Request extractors whose rejections use the service's error body.
//!
//! axum's own `Json`, `Query` and `Path` answer malformed input with a plain-text 400 or 422. These wrappers
//! turn the same rejections into `YardError::ValidationError`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use crate::errors::YardError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(YardError))]
pub struct ApiJson<T>(pub T);

/// Query string.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(YardError))]
pub struct ApiQuery<T>(pub T);

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(YardError))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for YardError {
    fn from(rejection: JsonRejection) -> Self {
        YardError::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for YardError {
    fn from(rejection: QueryRejection) -> Self {
        YardError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for YardError {
    fn from(rejection: PathRejection) -> Self {
        YardError::ValidationError(rejection.body_text())
    }
}
