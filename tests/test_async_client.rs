//! Async wrapper tests (requires the `async` feature).

#![cfg(feature = "async")]

mod common;

use common::{MockServer, Reply};
use serde_json::json;
use teacast_sdk::AsyncTeaCastClient;

#[tokio::test(flavor = "multi_thread")]
async fn async_operations_match_blocking_contracts() {
    let server = MockServer::start();
    let client = AsyncTeaCastClient::builder()
        .base_url(server.base_url.clone())
        .build()
        .await
        .unwrap();

    let auth = client.authenticate("testuser", "password").await.unwrap();
    assert!(auth.is_success());

    let points = client.fetch_prediction().await.unwrap().unwrap();
    assert_eq!(points.len(), 3);

    server.state.set_auction(Reply::Status(500, json!({})));
    assert!(client.fetch_auction_prices().await.is_empty());

    let bundle = client.fetch_dashboard().await.unwrap();
    assert_eq!(bundle.partition_categories().0.len(), 4);

    client.close().await.unwrap();
}
