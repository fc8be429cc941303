use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user record as exchanged over the API
///
/// Built fresh for each request and never stored. Fields absent from a
/// request body take their zero values.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct User {
    /// User ID
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "user1")]
    pub username: String,
    /// Sent in plaintext
    #[schema(example = "password")]
    pub password: String,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }
}
