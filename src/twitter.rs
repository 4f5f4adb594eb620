//! Outbound status updates via the Twitter v1.1 API, signed with OAuth 1.0a

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, TweeterError};

type HmacSha1 = Hmac<Sha1>;

const DEFAULT_API_BASE: &str = "https://api.twitter.com";
const STATUS_UPDATE_PATH: &str = "/1.1/statuses/update.json";

/// The four prearranged secrets for the posting account.
#[derive(Debug, Clone)]
pub struct TwitterCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

impl TwitterCredentials {
    /// Reads the credentials from the process environment. All four
    /// variables must be present.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            consumer_key: require_var("TWITTER_CONSUMER_KEY")?,
            consumer_secret: require_var("TWITTER_CONSUMER_SECRET")?,
            access_token: require_var("TWITTER_ACCESS_TOKEN")?,
            access_secret: require_var("TWITTER_ACCESS_SECRET")?,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| TweeterError::ConfigError(format!("missing environment variable '{name}'")))
}

/// The posting collaborator: deliver one status update, report the outcome.
#[async_trait]
pub trait StatusPoster: Send + Sync {
    async fn post_status(&self, text: &str) -> Result<()>;
}

/// Posting client holding an HTTP connection pool and the signing secrets.
pub struct TwitterClient {
    http_client: reqwest::Client,
    credentials: TwitterCredentials,
    base_url: String,
}

impl TwitterClient {
    /// # Panics
    ///
    /// * If the `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(credentials: TwitterCredentials) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("push_tweeter/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap();
        Self {
            http_client,
            credentials,
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl StatusPoster for TwitterClient {
    async fn post_status(&self, text: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, STATUS_UPDATE_PATH);
        let nonce = Uuid::new_v4().simple().to_string();
        let timestamp = Utc::now().timestamp();
        let authorization = authorization_header(
            "POST",
            &url,
            &[("status", text)],
            &self.credentials,
            &nonce,
            timestamp,
        );
        debug!("POST {url}");

        let response = self
            .http_client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .form(&[("status", text)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TweeterError::PostRejected { status, body });
        }
        Ok(())
    }
}

/// Percent-encodes per the RFC 3986 unreserved set, as OAuth 1.0a requires.
fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Builds the `Authorization: OAuth ...` header for one request.
///
/// The nonce and timestamp are arguments so signing stays deterministic
/// under test.
fn authorization_header(
    method: &str,
    url: &str,
    extra_params: &[(&str, &str)],
    credentials: &TwitterCredentials,
    nonce: &str,
    timestamp: i64,
) -> String {
    let timestamp = timestamp.to_string();
    let oauth_params: [(&str, &str); 6] = [
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", "1.0"),
    ];

    let signature = request_signature(method, url, extra_params, &oauth_params, credentials);

    let mut header_params: Vec<(&str, String)> = oauth_params
        .iter()
        .map(|&(key, value)| (key, percent_encode(value)))
        .collect();
    header_params.push(("oauth_signature", percent_encode(&signature)));
    header_params.sort();

    let rendered: Vec<String> = header_params
        .iter()
        .map(|(key, value)| format!("{key}=\"{value}\""))
        .collect();
    format!("OAuth {}", rendered.join(", "))
}

/// HMAC-SHA1 request signature: percent-encode every key and value, sort,
/// join into the parameter string, then sign
/// `METHOD&url&params` with `consumer_secret&token_secret`.
fn request_signature(
    method: &str,
    url: &str,
    extra_params: &[(&str, &str)],
    oauth_params: &[(&str, &str)],
    credentials: &TwitterCredentials,
) -> String {
    let mut encoded: Vec<(String, String)> = extra_params
        .iter()
        .chain(oauth_params.iter())
        .map(|&(key, value)| (percent_encode(key), percent_encode(value)))
        .collect();
    encoded.sort();

    let parameter_string = encoded
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = format!(
        "{}&{}&{}",
        method,
        percent_encode(url),
        percent_encode(&parameter_string)
    );
    let signing_key = format!(
        "{}&{}",
        percent_encode(&credentials.consumer_secret),
        percent_encode(&credentials.access_secret)
    );

    let mut mac =
        HmacSha1::new_from_slice(signing_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(base_string.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}
