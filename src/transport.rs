//! HTTP client adapter.
//!
//! Every API operation goes through the [`Transport`] trait, so the reqwest
//! backed [`HttpTransport`] can be swapped for an in-memory implementation in
//! tests or embedded front-ends.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;

use crate::config;
use crate::error::{Result, TeaCastError};

/// Issues JSON requests against a single configured origin.
///
/// Implementations return the decoded body for 2xx responses and surface
/// network failures and non-2xx statuses as transport errors.
pub trait Transport: Send + Sync {
    /// Origin every path is resolved against.
    fn base_url(&self) -> &str;

    fn get(&self, path: &str) -> Result<Value>;

    fn post(&self, path: &str, body: &Value) -> Result<Value>;
}

/// [`Transport`] backed by a blocking reqwest client.
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Build a transport for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = config::normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn execute(&self, method: &str, path: &str, request: RequestBuilder) -> Result<Value> {
        let start = Instant::now();
        tracing::debug!(method, path, base_url = %self.base_url, "Sending request");

        let resp = request.send().map_err(|e| {
            tracing::debug!(method, path, error = %e, "Network error");
            TeaCastError::from(e)
        })?;
        let status = resp.status();
        let bytes = resp.bytes()?;
        let duration_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::debug!(method, path, status = status.as_u16(), duration_ms, "Non-success status");
            return Err(TeaCastError::Status {
                status,
                body: serde_json::from_slice(&bytes).ok(),
            });
        }

        tracing::debug!(method, path, status = status.as_u16(), duration_ms, "Response received");
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl Transport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> Result<Value> {
        self.execute("GET", path, self.client.get(self.url(path)))
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.execute("POST", path, self.client.post(self.url(path)).json(body))
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn base_url(&self) -> &str {
        (**self).base_url()
    }

    fn get(&self, path: &str) -> Result<Value> {
        (**self).get(path)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        (**self).post(path, body)
    }
}
