use crate::core::config::{AuthConfig, AuthMode};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Decides whether a non-empty `Authorization` header value is acceptable
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credential: &str) -> bool;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Accepts any credential. The gate has already rejected empty ones.
#[derive(Debug, Default)]
pub struct PresenceVerifier;

impl CredentialVerifier for PresenceVerifier {
    fn verify(&self, _credential: &str) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "presence"
    }
}

/// Accepts `<token>` or `Bearer <token>` matching a configured secret
#[derive(Debug)]
pub struct StaticTokenVerifier {
    token: String,
}

impl StaticTokenVerifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl CredentialVerifier for StaticTokenVerifier {
    fn verify(&self, credential: &str) -> bool {
        let provided = credential.strip_prefix("Bearer ").unwrap_or(credential);
        constant_time_eq(provided, &self.token)
    }

    fn name(&self) -> &'static str {
        "static_token"
    }
}

/// Build the verifier selected by `auth.mode`
pub fn verifier_from_config(config: &AuthConfig) -> Result<Arc<dyn CredentialVerifier>> {
    match config.mode {
        AuthMode::Presence => Ok(Arc::new(PresenceVerifier)),
        AuthMode::StaticToken => {
            let token = config
                .token
                .clone()
                .filter(|t| !t.is_empty())
                .context("auth.token must be set when auth.mode is static_token")?;
            Ok(Arc::new(StaticTokenVerifier::new(token)))
        }
    }
}

/// Compare two strings in constant time so a token cannot be guessed
/// character by character.
pub fn constant_time_eq(provided: &str, expected: &str) -> bool {
    provided.as_bytes().len() == expected.as_bytes().len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
