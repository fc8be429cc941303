use crate::core::error::ApiError;
use crate::models::response::ErrorResponse;
use crate::models::user::User;
use axum::{
    body::Bytes,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use tracing::{debug, info};

/// Get all users.
///
/// GET /api/v1/users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 401, description = "Missing Authorization header", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn list_users() -> Json<Vec<User>> {
    Json(vec![
        User::new(1, "user1", "password"),
        User::new(2, "user2", "password"),
        User::new(3, "user3", "password"),
    ])
}

/// Find user by id.
///
/// GET /api/v1/users/{id}
///
/// A non-numeric id is treated as 0.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 401, description = "Missing Authorization header", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn find_user_by_id(Path(raw_id): Path<String>) -> Json<User> {
    let id = parse_id_lenient(&raw_id);

    Json(User::new(id, "mertcakmak", "password"))
}

/// Add a user.
///
/// POST /api/v1/users
///
/// The submitted id is echoed back; username and password are replaced.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body(content = User, description = "User to add", content_type = "application/json"),
    responses(
        (status = 200, description = "The saved user", body = User),
        (status = 400, description = "Body is not a valid user", body = ErrorResponse),
        (status = 401, description = "Missing Authorization header", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn add_user(body: Bytes) -> Result<Json<User>, ApiError> {
    let submitted = parse_user_body(&body)
        .inspect_err(|e| debug!(error = %e, "Rejected user body"))?;

    info!(user_id = submitted.id, "User added");

    Ok(Json(User::new(submitted.id, "saved_mertcakmak", "saved_password")))
}

/// Delete a user.
///
/// DELETE /api/v1/users/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted", body = String),
        (status = 401, description = "Missing Authorization header", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn delete_user_by_id(Path(id): Path<String>) -> Response {
    info!(user_id = %id, "User deleted");

    (StatusCode::NO_CONTENT, Json(format!("deleted user: {}", id))).into_response()
}

/// Decode a request body as a user.
///
/// Only a JSON object (or `null`, which yields the zero user) is accepted;
/// serde would otherwise also read the struct from a positional array.
fn parse_user_body(body: &[u8]) -> Result<User, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    match value {
        Value::Null => Ok(User::default()),
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|e| ApiError::InvalidBody(e.to_string()))
        }
        _ => Err(ApiError::InvalidBody("expected a JSON object".to_string())),
    }
}

/// Parse a path id, falling back to 0 when it is not an integer
fn parse_id_lenient(raw: &str) -> i64 {
    raw.parse().unwrap_or_else(|_| {
        debug!(raw_id = %raw, "Non-numeric user id, using 0");
        0
    })
}
