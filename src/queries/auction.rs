//! Auction ticker from `/data/tea-auction-price`.
//!
//! Best-effort: any failure degrades to an empty list.

use std::time::Instant;

use serde_json::Value;

use crate::config::AUCTION_PRICE_PATH;
use crate::error::Result;
use crate::models::AuctionPriceEntry;
use crate::policy::FailurePolicy;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// AuctionPriceQuery
// ---------------------------------------------------------------------------

pub struct AuctionPriceQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> AuctionPriceQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Fetch the `average_prices` list.
    ///
    /// Never fails: transport and decode errors are logged and an empty list
    /// is returned, so the caller shows "no data" rather than an error.
    pub fn fetch(&self) -> Vec<AuctionPriceEntry> {
        let start = Instant::now();
        let outcome = self
            .transport
            .get(AUCTION_PRICE_PATH)
            .and_then(parse_auction_prices);

        if let Ok(entries) = &outcome {
            tracing::info!(
                operation = "fetch_auction_prices",
                entries = entries.len(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Auction prices fetched"
            );
        }
        FailurePolicy::RecoverWith(Vec::new())
            .resolve("fetch_auction_prices", outcome)
            .unwrap_or_default()
    }
}

/// Extract `average_prices` from a decoded body. A missing or `null` field
/// yields an empty list.
pub fn parse_auction_prices(body: Value) -> Result<Vec<AuctionPriceEntry>> {
    match body.get("average_prices") {
        None | Some(Value::Null) => {
            tracing::warn!(
                operation = "fetch_auction_prices",
                "Response has no `average_prices`; treating as empty"
            );
            Ok(Vec::new())
        }
        Some(entries) => Ok(serde_json::from_value(entries.clone())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_or_null_field_is_empty() {
        assert!(parse_auction_prices(json!({})).unwrap().is_empty());
        assert!(parse_auction_prices(json!({"average_prices": null})).unwrap().is_empty());
        assert!(parse_auction_prices(json!("oops")).unwrap().is_empty());
    }

    #[test]
    fn wrong_type_is_a_decode_error() {
        assert!(parse_auction_prices(json!({"average_prices": "n/a"})).is_err());
    }

    #[test]
    fn entries_are_decoded_in_order() {
        let entries = parse_auction_prices(json!({
            "average_prices": [
                {"name": "Ceylon Black Tea", "date": "2023-01-15", "price": "$4.50"},
                {"name": "BOPF", "date": "2023-01-15", "price": "LKR 1,240.00"}
            ]
        }))
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "BOPF");
    }
}
