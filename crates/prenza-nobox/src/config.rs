//! Client configuration loaded from environment variables.

use std::env;

/// Connection settings for the hosted record store.
#[derive(Debug, Clone)]
pub struct NoboxConfig {
    /// Base URL of the hosted service.
    pub endpoint: String,
    /// Project namespace the spaces live under.
    pub project: String,
    /// Bearer token for the project.
    pub token: String,
}

impl NoboxConfig {
    /// Load from `NOBOX_ENDPOINT`, `NOBOX_PROJECT` and `NOBOX_TOKEN`.
    /// Returns `None` when no endpoint is configured, so callers can fall
    /// back to the in-memory store.
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("NOBOX_ENDPOINT").ok()?;

        Some(Self {
            endpoint,
            project: env::var("NOBOX_PROJECT").unwrap_or_else(|_| "prenza".to_string()),
            token: env::var("NOBOX_TOKEN").unwrap_or_default(),
        })
    }
}
