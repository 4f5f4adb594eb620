//! Service status endpoints

use axum::{Json, extract::State as AxumState};
use serde_json::{Value, json};

use crate::SharedState;

pub async fn root() -> &'static str {
    "Hello, World!"
}

/// Returns the current server status
pub async fn status(AxumState(state): AxumState<SharedState>) -> Json<Value> {
    Json(json!({
        "server": {
            "name": "push_tweeter",
            "version": env!("CARGO_PKG_VERSION"),
            "started_at": state.started_at,
            "uptime_seconds": state.start_time.elapsed().as_secs(),
        }
    }))
}
