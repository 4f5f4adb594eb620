/// Custom error type for push_tweeter operations
#[derive(Debug, thiserror::Error)]
pub enum TweeterError {
    #[error("Failed to grok the X-GitHub-Event header: {0}")]
    UnrecognizedEvent(String),

    #[error("Failed to parse a ping request:\n{0}")]
    PingParseFailed(#[source] serde_json::Error),

    #[error("Failed to parse a push request:\n{0}")]
    PushParseFailed(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Status update request failed: {0}")]
    PostRequestFailed(#[from] reqwest::Error),

    #[error("Status update rejected: HTTP {status}\n{body}")]
    PostRejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Helper type for Results that use TweeterError
pub type Result<T> = std::result::Result<T, TweeterError>;
