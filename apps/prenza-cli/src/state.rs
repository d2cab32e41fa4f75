//! Store selection - picks the record store implementation from the
//! environment.

use std::sync::Arc;

use prenza_core::ports::RecordStore;
use prenza_nobox::{InMemoryStore, NoboxClient, NoboxConfig, blog_space};

/// Build the record store: the hosted nobox client when an endpoint is
/// configured, otherwise an in-memory fallback.
pub fn build_store() -> Arc<dyn RecordStore> {
    match NoboxConfig::from_env() {
        Some(config) => match NoboxClient::new(config, blog_space()) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                tracing::error!(
                    "Failed to build nobox client: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryStore::new())
            }
        },
        None => {
            tracing::warn!("NOBOX_ENDPOINT not set. Running against an in-memory store.");
            Arc::new(InMemoryStore::new())
        }
    }
}
