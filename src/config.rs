use crate::view::FetchPolicy;
use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "https://schollpropback.onrender.com";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// `None` disables the client-side timeout entirely.
    pub http_timeout: Option<Duration>,
    pub fetch_policy: FetchPolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = lookup("LISTINGS_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|| "360".to_string())
            .parse()
            .context("LISTINGS_HTTP_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            backend_url: lookup("LISTINGS_BACKEND_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            bind_addr: lookup("BIND_ADDR")
                .unwrap_or_else(|| "127.0.0.1:3000".to_string())
                .parse()
                .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?,
            max_workers: lookup("MAX_WORKERS")
                .unwrap_or_else(|| "8".to_string())
                .parse()
                .context("MAX_WORKERS must be a valid number")?,
            http_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            fetch_policy: match lookup("LISTINGS_FETCH_POLICY") {
                Some(raw) => raw.parse().map_err(|e: String| anyhow!(e))?,
                None => FetchPolicy::default(),
            },
        })
    }
}
