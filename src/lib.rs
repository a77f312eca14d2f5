//! TeaCast SDK for Rust.
//!
//! Provides a client for the TeaCast tea-auction API: login, the price
//! forecast, the auction ticker and the analytics dashboard. On top of the
//! client sit view models that track loading/error/data state per page and
//! render it as text, plus a small router mapping paths to pages.
//!
//! # Quick start
//!
//! ```no_run
//! use teacast_sdk::TeaCastClient;
//!
//! let client = TeaCastClient::builder()
//!     .base_url("http://127.0.0.1:5000")
//!     .build()
//!     .unwrap();
//!
//! // `None` means no forecast has been published yet.
//! if let Some(points) = client.predictions().fetch().unwrap() {
//!     println!("{} forecast points", points.len());
//! }
//!
//! // Best-effort: an unreachable server yields an empty list.
//! let ticker = client.auction_prices().fetch();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod policy;
pub mod queries;
pub mod router;
pub mod session;
pub mod transport;
pub mod views;

#[cfg(feature = "async")]
pub use async_client::AsyncTeaCastClient;
pub use error::{ErrorKind, Result, TeaCastError};
pub use models::{
    AuctionPriceEntry, AuthResult, CategoryTile, Credentials, DashboardBundle, PredictionPoint,
    PredictionResult, PRIORITY_CATEGORIES,
};
pub use policy::FailurePolicy;
pub use router::Route;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use transport::{HttpTransport, Transport};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// TeaCastClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`TeaCastClient`].
///
/// Use [`TeaCastClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](TeaCastClientBuilder::build).
#[derive(Default)]
pub struct TeaCastClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Box<dyn Transport>>,
}

impl TeaCastClientBuilder {
    /// Set the API origin (e.g. `http://127.0.0.1:5000`).
    ///
    /// If not set, `TEACAST_API_URL` is used, then the local default.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout.
    ///
    /// If not set, `TEACAST_TIMEOUT_SECS` is used, then 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom [`Transport`] instead of HTTP. `base_url` and `timeout`
    /// are ignored when set.
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client. Fails if the origin is not an absolute http(s) URL
    /// or the HTTP client cannot be created; no request is sent.
    pub fn build(self) -> Result<TeaCastClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let base_url = config::resolve_base_url(self.base_url.as_deref())?;
                let timeout = config::resolve_timeout(self.timeout);
                Box::new(HttpTransport::new(&base_url, timeout)?)
            }
        };
        tracing::debug!(base_url = transport.base_url(), "TeaCast client ready");
        Ok(TeaCastClient { transport })
    }
}

// ---------------------------------------------------------------------------
// TeaCastClient
// ---------------------------------------------------------------------------

/// Entry point for the TeaCast API.
///
/// Owns the [`Transport`] and hands out lightweight query wrappers that
/// borrow it. The client holds no per-request state; it can be shared across
/// threads behind an `Arc`.
pub struct TeaCastClient {
    transport: Box<dyn Transport>,
}

impl TeaCastClient {
    pub fn builder() -> TeaCastClientBuilder {
        TeaCastClientBuilder::default()
    }

    /// Login (`POST /login`).
    pub fn auth(&self) -> queries::AuthQuery<'_> {
        queries::AuthQuery::new(self.transport.as_ref())
    }

    /// Price forecast (`GET /data/predict`).
    pub fn predictions(&self) -> queries::PredictionQuery<'_> {
        queries::PredictionQuery::new(self.transport.as_ref())
    }

    /// Auction ticker (`GET /data/tea-auction-price`). Never fails.
    pub fn auction_prices(&self) -> queries::AuctionPriceQuery<'_> {
        queries::AuctionPriceQuery::new(self.transport.as_ref())
    }

    /// Analytics bundle (`GET /data/dashboard`).
    pub fn dashboard(&self) -> queries::DashboardQuery<'_> {
        queries::DashboardQuery::new(self.transport.as_ref())
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Return a reference to the underlying [`Transport`].
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl fmt::Display for TeaCastClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TeaCastClient(base_url={})", self.base_url())
    }
}
