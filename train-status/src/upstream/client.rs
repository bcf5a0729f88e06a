//! Upstream HTTP client with ordered host failover.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::domain::StationCode;

use super::error::UpstreamError;
use super::types::{StationListing, TrainDetail};

/// Primary host for the train-tracking API.
const PRIMARY_BASE_URL: &str = "https://api-v3.amtraker.com";

/// Fallback host, tried when the primary fails.
const FALLBACK_BASE_URL: &str = "https://api.amtraker.com";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

/// A decoded JSON object body.
pub type JsonObject = serde_json::Map<String, Value>;

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URLs, in the order they are tried
    pub base_urls: Vec<String>,
    /// Timeout applied to each individual request
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Create a config pointing at the production hosts.
    pub fn new() -> Self {
        Self {
            base_urls: vec![PRIMARY_BASE_URL.to_string(), FALLBACK_BASE_URL.to_string()],
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the host list (for testing).
    pub fn with_base_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One candidate host serving the upstream API.
#[derive(Debug, Clone)]
pub struct UpstreamHost {
    base_url: String,
}

impl UpstreamHost {
    /// Create a host from its base URL. A trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The host's base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` from this host and decode it as a JSON object.
    ///
    /// Anything other than a 2xx response carrying a JSON object is an error.
    async fn fetch(&self, http: &reqwest::Client, path: &str) -> Result<JsonObject, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);

        let response = http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;

        let value: Value = serde_json::from_str(&body).map_err(|e| UpstreamError::Json {
            message: e.to_string(),
        })?;

        match value {
            Value::Object(map) => Ok(map),
            other => Err(UpstreamError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }
}

/// Name of a JSON value's type, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Upstream API client.
///
/// Holds one shared connection pool and the ordered list of hosts. Each
/// fetch walks the hosts front to back and stops at the first success.
/// There is no retry against the same host and no backoff.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    hosts: Vec<UpstreamHost>,
}

impl UpstreamClient {
    /// Create a new upstream client with the given configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        if config.base_urls.is_empty() {
            return Err(UpstreamError::NotConfigured(
                "at least one upstream base URL is required".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let hosts = config.base_urls.into_iter().map(UpstreamHost::new).collect();

        Ok(Self { http, hosts })
    }

    /// The hosts in the order they are tried.
    pub fn hosts(&self) -> &[UpstreamHost] {
        &self.hosts
    }

    /// Fetch `path` from the first host that returns a JSON object.
    ///
    /// `path` must already carry the versioned API prefix, e.g.
    /// `/v3/stations/WAS`.
    pub async fn fetch_json(&self, path: &str) -> Result<JsonObject, UpstreamError> {
        let mut last = None;

        for host in &self.hosts {
            match host.fetch(&self.http, path).await {
                Ok(object) => {
                    debug!(host = host.base_url(), path, "upstream fetch succeeded");
                    return Ok(object);
                }
                Err(e) => {
                    warn!(host = host.base_url(), path, error = %e, "upstream host failed");
                    last = Some((host.base_url().to_string(), e));
                }
            }
        }

        // `new` rejects an empty host list, so `last` is always set here
        let (host, last) = last.ok_or_else(|| {
            UpstreamError::NotConfigured("no upstream hosts configured".to_string())
        })?;

        error!(path, host = %host, error = %last, "all upstream hosts failed");
        Err(UpstreamError::Unavailable {
            host,
            last: Box::new(last),
        })
    }

    /// Fetch the listing of trains currently associated with a station.
    pub async fn fetch_station_listing(
        &self,
        code: &StationCode,
    ) -> Result<StationListing, UpstreamError> {
        let path = format!("/v3/stations/{}", code.as_str());
        self.fetch_json(&path).await.map(StationListing::new)
    }

    /// Fetch the detail feed for one train identifier (e.g. `"123-1"`).
    ///
    /// The identifier comes from the listing feed and is percent-encoded
    /// into a single path segment.
    pub async fn fetch_train_detail(&self, train_id: &str) -> Result<TrainDetail, UpstreamError> {
        let path = format!("/v3/trains/{}", urlencoding::encode(train_id));
        self.fetch_json(&path).await.map(TrainDetail::new)
    }
}
