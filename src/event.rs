//! Webhook event classification and payload decoding

use serde::Deserialize;

use crate::error::{Result, TweeterError};

/// Recognized values of the `X-GitHub-Event` header. GitHub sends the event
/// name verbatim and the comparison is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Ping,
    Push,
}

impl EventKind {
    pub fn from_header(value: &str) -> Option<Self> {
        match value {
            "ping" => Some(Self::Ping),
            "push" => Some(Self::Push),
            _ => None,
        }
    }
}

/// A decoded webhook request body, tagged by event kind.
#[derive(Debug, Clone)]
pub enum WebhookEvent {
    Ping(PingPayload),
    Push(PushPayload),
}

/// Ping body. GitHub sends `zen`, `hook_id` and repository metadata, none of
/// which this service uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PingPayload {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub head_commit: PushCommit,
    #[serde(default)]
    pub commits: Vec<PushCommit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushCommit {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: GitAuthor,
    #[serde(default)]
    pub committer: GitAuthor,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitAuthor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Classifies the event header and decodes the body into the matching
/// payload. Unknown JSON fields are ignored; missing fields decode to their
/// empty values.
pub fn decode_event(event: &str, body: &[u8]) -> Result<WebhookEvent> {
    match EventKind::from_header(event) {
        Some(EventKind::Ping) => serde_json::from_slice(body)
            .map(WebhookEvent::Ping)
            .map_err(TweeterError::PingParseFailed),
        Some(EventKind::Push) => serde_json::from_slice(body)
            .map(WebhookEvent::Push)
            .map_err(TweeterError::PushParseFailed),
        None => Err(TweeterError::UnrecognizedEvent(event.to_string())),
    }
}
