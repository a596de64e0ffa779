use std::env;
use std::net::SocketAddr;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Runtime configuration for the rate-limit endpoint and its GitHub client.
/// Values are sourced from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub bind: SocketAddr,
}

impl Config {
    /// Load configuration from environment.
    ///
    /// Env vars:
    /// - GITHUB_TOKEN (or GH_TOKEN) (default: empty, requests go out unauthenticated)
    /// - GITHUB_API_URL (default: https://api.github.com)
    /// - GITHUB_HTTP_TIMEOUT_SECS (default: 30)
    /// - GITHUB_USER_AGENT (default: gh-rate-limit/<version>)
    /// - GH_RATE_LIMIT_BIND (default: 127.0.0.1:8080)
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("GITHUB_TOKEN")
            .or_else(|| lookup("GH_TOKEN"))
            .unwrap_or_default();

        let api_url = lookup("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Url::parse(&api_url).map_err(|e| format!("Invalid GITHUB_API_URL {}: {}", api_url, e))?;
        let api_url = api_url.trim_end_matches('/').to_string();

        let timeout_secs = lookup("GITHUB_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);
        let user_agent = lookup("GITHUB_USER_AGENT")
            .unwrap_or_else(|| format!("gh-rate-limit/{}", env!("CARGO_PKG_VERSION")));

        let bind_raw = lookup("GH_RATE_LIMIT_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid GH_RATE_LIMIT_BIND {}: {}", bind_raw, e))?;

        Ok(Self {
            token,
            api_url,
            user_agent,
            timeout_secs,
            bind,
        })
    }

    /// Full URL of the rate limit endpoint.
    pub fn rate_limit_url(&self) -> String {
        format!("{}/rate_limit", self.api_url)
    }
}
