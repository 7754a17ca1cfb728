//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use mboard_core::MessageService;

use crate::config::Config;

/// State shared across all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Message operations over the SQLite store.
    pub service: MessageService,
}
