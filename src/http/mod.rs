use crate::config::Config;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("creating request failed: {0}")]
    RequestBuild(#[source] reqwest::Error),
    #[error("doing request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("reading response failed: {0}")]
    Body(#[source] reqwest::Error),
    #[error("upstream request failed: {status}: {body}")]
    Status { status: StatusCode, body: String },
}

pub fn build_client(cfg: &Config) -> reqwest::Result<Client> {
    let mut default_headers = HeaderMap::new();
    if let Ok(ua) = HeaderValue::from_str(&cfg.user_agent) {
        default_headers.insert(USER_AGENT, ua);
    }
    // Authorization header is injected per request so a bad token surfaces as a request error.
    Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls()
        .build()
}

/// GitHub REST client bound to one credential and one rate limit endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    url: String,
    token: String,
}

impl UpstreamClient {
    pub fn new(cfg: &Config) -> reqwest::Result<Self> {
        Ok(Self {
            client: build_client(cfg)?,
            url: cfg.rate_limit_url(),
            token: cfg.token.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the rate limit document and return its raw body.
    ///
    /// The response is owned by this call and dropped before returning, so
    /// the body is always drained and the connection handed back to the pool.
    pub async fn fetch_rate_limit(&self) -> Result<Vec<u8>, ClientError> {
        let req = self
            .client
            .get(&self.url)
            .header(ACCEPT, ACCEPT_V3)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .build()
            .map_err(ClientError::RequestBuild)?;

        let res = self
            .client
            .execute(req)
            .await
            .map_err(ClientError::Transport)?;
        let status = res.status();
        let body = res.bytes().await.map_err(ClientError::Body)?;
        debug!("GET {} -> {} ({} bytes)", self.url, status, body.len());

        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                body: String::from_utf8_lossy(&body).trim().to_string(),
            });
        }
        Ok(body.to_vec())
    }
}
