use push_tweeter::twitter::{TwitterClient, TwitterCredentials};
use push_tweeter::{AppState, router};
use std::sync::Arc;
use tracing::{self, info};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8888";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

    let credentials = match TwitterCredentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt::init();

    let poster = Arc::new(TwitterClient::new(credentials));
    let state = Arc::new(AppState::new(poster));
    let app = router(state);

    info!("Listening on {}", bind_address);
    let listener = tokio::net::TcpListener::bind(bind_address).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
