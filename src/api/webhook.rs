//! Webhook handler for GitHub ping and push events

use axum::{
    body::{Body, Bytes},
    extract::State as AxumState,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::SharedState;
use crate::announce::compose_announcement;
use crate::event::{WebhookEvent, decode_event};

/// Handles the GitHub webhook POST request.
///
/// Every outcome maps to a response here. A push is acknowledged with the
/// announcement text and a 200 whether or not the status update went out;
/// the posting failure only shows up in the log.
pub async fn handle_webhook(
    AxumState(state): AxumState<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let event = headers
        .get("X-GitHub-Event")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    info!("Handling request with X-GitHub-Event={event}");

    match decode_event(event, &body) {
        Ok(WebhookEvent::Ping(_)) => {
            info!("Ping acknowledged");
            Response::new(Body::from("OK\n"))
        }
        Ok(WebhookEvent::Push(payload)) => {
            let announcement = compose_announcement(&payload.head_commit);
            info!("{announcement}");
            if let Err(e) = state.poster.post_status(&announcement).await {
                error!("Status update failed, acknowledging webhook anyway: {e}");
            }
            plain_text(StatusCode::OK, announcement)
        }
        Err(e) => {
            error!("{e}");
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, format!("{e}\n"))
        }
    }
}

fn plain_text(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
}
