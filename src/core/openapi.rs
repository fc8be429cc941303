//! OpenAPI document for the service, generated by utoipa from the handler
//! annotations. `ApiDoc::openapi()` returns the document.

use crate::handlers::{health, users};
use crate::models::response::{ErrorResponse, HealthResponse};
use crate::models::user::User;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

/// Path of the machine-readable document
pub const OPENAPI_JSON_PATH: &str = "/swagger/doc.json";

/// Mount point of the interactive UI
pub const SWAGGER_UI_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "2.0",
        description = "Sample user management server.",
        terms_of_service = "http://swagger.io/terms/",
        contact(name = "API Support", url = "http://www.swagger.io/support", email = "support@swagger.io"),
        license(name = "Apache 2.0", url = "http://www.apache.org/licenses/LICENSE-2.0.html")
    ),
    paths(
        users::list_users,
        users::find_user_by_id,
        users::add_user,
        users::delete_user_by_id,
        health::health_handler,
    ),
    components(schemas(User, ErrorResponse, HealthResponse)),
    tags(
        (name = "users", description = "User management"),
        (name = "health", description = "Liveness check"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Registers `BearerAuth`: an API key carried in the `Authorization` header.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "BearerAuth",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
        );
    }
}
