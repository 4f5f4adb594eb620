pub mod announce;
pub mod api;
pub mod error;
pub mod event;
pub mod twitter;

use axum::{Router, routing};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::twitter::StatusPoster;

pub struct AppState {
    pub poster: Arc<dyn StatusPoster>,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(poster: Arc<dyn StatusPoster>) -> Self {
        Self {
            poster,
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<AppState>;

/// Builds the service router. Shared between `main` and the integration
/// tests.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", routing::get(api::root))
        .route("/webhook", routing::post(api::handle_webhook))
        .route("/status", routing::get(api::status))
        .with_state(state)
}
