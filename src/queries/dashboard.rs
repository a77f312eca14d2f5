//! Analytics bundle from `/data/dashboard`.

use std::time::Instant;

use crate::config::DASHBOARD_PATH;
use crate::error::Result;
use crate::models::DashboardBundle;
use crate::policy::FailurePolicy;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// DashboardQuery
// ---------------------------------------------------------------------------

pub struct DashboardQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> DashboardQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Fetch the dashboard bundle. Missing or malformed sub-fields decode as
    /// empty; transport errors are returned unchanged.
    pub fn fetch(&self) -> Result<DashboardBundle> {
        let start = Instant::now();
        tracing::debug!(operation = "fetch_dashboard", path = DASHBOARD_PATH, "Fetching dashboard");

        let outcome = self
            .transport
            .get(DASHBOARD_PATH)
            .and_then(DashboardBundle::from_body);

        if let Ok(bundle) = &outcome {
            tracing::info!(
                operation = "fetch_dashboard",
                categories = bundle.all_average_price_data.len(),
                tea_prices = bundle.tea_price_data.tea_prices.len(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Dashboard fetched"
            );
        }
        FailurePolicy::Propagate.resolve("fetch_dashboard", outcome)
    }
}
