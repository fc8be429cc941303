// Authentication gate applied to every user-resource route

use crate::core::error::ApiError;
use crate::core::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Reject the request with 401 unless it carries an acceptable
/// `Authorization` header. The wrapped handler never runs on rejection.
pub async fn require_credentials(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credential = request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    debug!(authorization = %credential, path = %request.uri().path(), "Inbound credential");

    if credential.is_empty() {
        warn!(path = %request.uri().path(), "Request without credentials rejected");
        return Err(ApiError::Unauthorized);
    }

    if !state.verifier.verify(&credential) {
        warn!(
            path = %request.uri().path(),
            verifier = state.verifier.name(),
            "Request with invalid credentials rejected"
        );
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    fn create_test_app(config_toml: &str) -> Router {
        let config = Config::from_toml(config_toml).expect("Failed to parse config");
        let state = Arc::new(AppState::new(config).expect("Failed to build state"));

        Router::new()
            .route("/test", get(ok_handler))
            .route_layer(from_fn_with_state(state.clone(), require_credentials))
            .with_state(state)
    }

    fn request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/test");
        if let Some(value) = authorization {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let app = create_test_app("[server]\n");

        let response = app.oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_empty_header_rejected() {
        let app = create_test_app("[server]\n");

        let response = app.oneshot(request(Some(""))).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_any_header_passes_in_presence_mode() {
        let app = create_test_app("[server]\n");

        let response = app.oneshot(request(Some("anything at all"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_static_token_mode() {
        let config = "[server]\n[auth]\nmode = \"static_token\"\ntoken = \"s3cret\"\n";

        let response = create_test_app(config)
            .oneshot(request(Some("Bearer nope")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = create_test_app(config)
            .oneshot(request(Some("Bearer s3cret")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
