// remote.rs
use crate::client::{Credentials, ListingsService, ServiceError};
use crate::domain::Record;
use reqwest::blocking::{Client, Response};
use std::time::{Duration, Instant};
use url::Url;

const USER_AGENT: &str = concat!("schoolprop-listings/", env!("CARGO_PKG_VERSION"));

pub struct HttpListingsService {
    client: Client,
    base_url: Url,
}

impl HttpListingsService {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ServiceError> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }
}

impl ListingsService for HttpListingsService {
    fn list_records(&self, city: &str) -> Result<Vec<Record>, ServiceError> {
        let url = listings_url(&self.base_url, city)?;
        let start = Instant::now();

        let resp = self.client.get(url).send()?;
        let resp = ensure_success(resp)?;

        // Decode separately so a malformed body is reported as such.
        let text = resp.text()?;
        let records: Vec<Record> =
            serde_json::from_str(&text).map_err(|e| ServiceError::Decode(e.to_string()))?;

        tracing::debug!(
            city,
            count = records.len(),
            elapsed = ?start.elapsed(),
            "fetched listings"
        );
        Ok(records)
    }

    fn run_scrape(&self, credentials: &Credentials) -> Result<(), ServiceError> {
        let url = scrape_url(&self.base_url)?;
        let start = Instant::now();

        let resp = self.client.post(url).json(credentials).send()?;
        ensure_success(resp)?;

        tracing::debug!(elapsed = ?start.elapsed(), "scrape request completed");
        Ok(())
    }
}

fn ensure_success(resp: Response) -> Result<Response, ServiceError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
    Err(ServiceError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Base URLs are treated as directories so `join` appends instead of replacing
/// the last path segment.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ServiceError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).map_err(|e| ServiceError::Config(format!("{raw}: {e}")))
}

pub(crate) fn listings_url(base: &Url, city: &str) -> Result<Url, ServiceError> {
    let mut url = base
        .join("landlords")
        .map_err(|e| ServiceError::Config(e.to_string()))?;

    if !city.is_empty() {
        url.query_pairs_mut().append_pair("city", city);
    }
    Ok(url)
}

pub(crate) fn scrape_url(base: &Url) -> Result<Url, ServiceError> {
    base.join("landlords/run-scrape")
        .map_err(|e| ServiceError::Config(e.to_string()))
}
