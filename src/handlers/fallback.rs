use crate::core::error::ApiError;
use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

pub async fn fallback_handler(method: Method, uri: Uri) -> Response {
    debug!(method = %method, path = %uri.path(), "No route matched");

    ApiError::NotFound(format!("{} {}", method, uri.path())).into_response()
}
