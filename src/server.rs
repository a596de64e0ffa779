use crate::config::Config;
use crate::http::{ClientError, UpstreamClient};
use crate::types::RateLimitResponse;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::Arc;
use thiserror::Error;

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("decoding json failed: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("encoding json failed: {0}")]
    Encode(#[source] serde_json::Error),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        warn!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub client: UpstreamClient,
    pub clock: Clock,
}

impl AppState {
    pub fn new(client: UpstreamClient) -> Self {
        Self {
            client,
            clock: Arc::new(Utc::now),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

/// Decode an upstream `/rate_limit` body, humanize its reset times against
/// `now`, and pretty-print the result with two-space indentation.
pub fn assemble(body: &[u8], now: DateTime<Utc>) -> Result<String, HandlerError> {
    let decoded: RateLimitResponse = serde_json::from_slice(body).map_err(HandlerError::Decode)?;
    serde_json::to_string_pretty(&decoded.render(now)).map_err(HandlerError::Encode)
}

async fn rate_limit(State(state): State<AppState>) -> Result<Response, HandlerError> {
    debug!("Fetching {}", state.client.url());
    let body = state.client.fetch_rate_limit().await?;
    let pretty = assemble(&body, (state.clock)())?;
    Ok(([(header::CONTENT_TYPE, "application/json")], pretty).into_response())
}

/// Every method and path is answered by the rate limit handler.
pub fn router(state: AppState) -> Router {
    Router::new().fallback(rate_limit).with_state(state)
}

pub async fn run_http_server(cfg: Config) -> anyhow::Result<()> {
    let client = UpstreamClient::new(&cfg)?;
    let app = router(AppState::new(client));
    let listener = tokio::net::TcpListener::bind(cfg.bind).await?;
    info!(
        "Serving GitHub rate limits on http://{} (upstream {})",
        listener.local_addr()?,
        cfg.rate_limit_url()
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
