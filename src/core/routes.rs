// HTTP routes configuration

use crate::core::openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::core::state::AppState;
use crate::handlers::{fallback, health, users};
use crate::security::auth_gate::require_credentials;
use axum::{middleware::from_fn_with_state, routing::get, Router};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn build_router(state: Arc<AppState>) -> Router {
    // User endpoints (require Authorization header)
    let users = Router::new()
        .route("/users", get(users::list_users).post(users::add_user))
        .route(
            "/users/{id}",
            get(users::find_user_by_id).delete(users::delete_user_by_id),
        )
        .route_layer(from_fn_with_state(Arc::clone(&state), require_credentials));

    let mut router = Router::new()
        .nest("/api/v1", users)
        // Public endpoints
        .route("/health", get(health::health_handler));

    if state.config.docs.enabled {
        router = router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()));
    }

    router
        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)
        .with_state(state)
}
