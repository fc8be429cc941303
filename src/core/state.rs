// Application state (AppState)

use crate::core::config::Config;
use crate::security::credentials::{verifier_from_config, CredentialVerifier};
use anyhow::Result;
use std::sync::Arc;

/// Shared application state
///
/// Immutable after startup; handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    /// Verifier consulted by the authentication gate
    pub verifier: Arc<dyn CredentialVerifier>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let verifier = verifier_from_config(&config.auth)?;

        Ok(Self {
            verifier,
            config: Arc::new(config),
        })
    }
}
