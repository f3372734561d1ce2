use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Read-only: questionnaire sessions travel in request bodies, not here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Current time in the configured zone, formatted `YYYY-MM-DD HH:MM`.
    pub fn timestamp_now(&self) -> String {
        jiff::Timestamp::now()
            .to_zoned(self.config.time_zone.clone())
            .strftime("%Y-%m-%d %H:%M")
            .to_string()
    }
}
