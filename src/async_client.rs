//! Async wrapper around [`TeaCastClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every request on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use teacast_sdk::AsyncTeaCastClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncTeaCastClient::builder()
//!         .base_url("http://127.0.0.1:5000")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let forecast = client.fetch_prediction().await.unwrap();
//!     let ticker = client.fetch_auction_prices().await;
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{Result, TeaCastError};
use crate::models::{AuctionPriceEntry, AuthResult, DashboardBundle, PredictionResult};
use crate::TeaCastClient;

// ---------------------------------------------------------------------------
// AsyncTeaCastClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncTeaCastClient`].
#[derive(Default)]
pub struct AsyncTeaCastClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl AsyncTeaCastClientBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client on the blocking pool; the blocking reqwest client
    /// must not be created on an async worker thread.
    pub async fn build(self) -> Result<AsyncTeaCastClient> {
        tokio::task::spawn_blocking(move || {
            let mut builder = TeaCastClient::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            Ok(AsyncTeaCastClient {
                inner: Arc::new(builder.build()?),
            })
        })
        .await
        .map_err(|e| TeaCastError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncTeaCastClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`TeaCastClient`].
///
/// Cloning is cheap; clones share the same underlying client.
#[derive(Clone)]
pub struct AsyncTeaCastClient {
    inner: Arc<TeaCastClient>,
}

impl AsyncTeaCastClient {
    pub fn builder() -> AsyncTeaCastClientBuilder {
        AsyncTeaCastClientBuilder::default()
    }

    /// Wrap an existing client.
    pub fn from_client(client: Arc<TeaCastClient>) -> Self {
        Self { inner: client }
    }

    /// Run a blocking client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&TeaCastClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| TeaCastError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<AuthResult> {
        let username = username.to_string();
        let password = password.to_string();
        self.run(move |c| c.auth().login(&username, &password)).await
    }

    pub async fn fetch_prediction(&self) -> Result<PredictionResult> {
        self.run(|c| c.predictions().fetch()).await
    }

    /// Never fails; a join error also degrades to an empty list.
    pub async fn fetch_auction_prices(&self) -> Vec<AuctionPriceEntry> {
        self.run(|c| Ok(c.auction_prices().fetch()))
            .await
            .unwrap_or_default()
    }

    pub async fn fetch_dashboard(&self) -> Result<DashboardBundle> {
        self.run(|c| c.dashboard().fetch()).await
    }

    /// Release this handle on the blocking pool, so the last reference to
    /// the blocking HTTP client is never dropped on an async worker.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| TeaCastError::InvalidArgument(format!("Task join error: {e}")))
    }
}
