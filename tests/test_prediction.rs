//! Forecast endpoint integration tests.

mod common;

use common::{MockServer, Reply};
use serde_json::json;
use teacast_sdk::{ErrorKind, PredictionPoint};

#[test]
fn null_prediction_is_none_not_error() {
    let server = MockServer::start();
    server.state.set_prediction(Reply::Json(json!({"prediction": null})));

    assert_eq!(server.client().predictions().fetch().unwrap(), None);
}

#[test]
fn sequence_is_returned_unchanged() {
    let server = MockServer::start();
    server.state.set_prediction(Reply::Json(json!({
        "prediction": [{"Auction_Number": 1, "Final_Prediction": 1250.75}]
    })));

    let points = server.client().predictions().fetch().unwrap().unwrap();
    assert_eq!(points, vec![PredictionPoint::auction(1, 1250.75)]);
}

#[test]
fn extra_point_fields_are_not_dropped() {
    let server = MockServer::start();
    let points = json!([
        {"Auction_Number": 1.0, "Final_Prediction": 1250.75, "Lower_Bound": 1200.0},
        {"Auction_Number": 2, "Final_Prediction": null, "Upper_Bound": 1310.0}
    ]);
    server
        .state
        .set_prediction(Reply::Json(json!({"prediction": points.clone()})));

    let fetched = server.client().predictions().fetch().unwrap().unwrap();
    assert_eq!(fetched[0].label(), "1");
    assert_eq!(fetched[1].price(), None);
    assert_eq!(serde_json::to_value(&fetched).unwrap(), points);
}

#[test]
fn missing_field_is_a_validation_error() {
    let server = MockServer::start();
    server.state.set_prediction(Reply::Json(json!({})));

    let err = server.client().predictions().fetch().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("Invalid API response format"));
}

#[test]
fn server_error_propagates_as_transport() {
    let server = MockServer::start();
    server
        .state
        .set_prediction(Reply::Status(500, json!({"error": "model not loaded"})));

    let err = server.client().predictions().fetch().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[test]
fn non_json_body_is_a_decode_error() {
    let server = MockServer::start();
    server.state.set_prediction(Reply::Text(200, "<html>maintenance</html>"));

    let err = server.client().predictions().fetch().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn unreachable_server_propagates() {
    let err = common::unreachable_client().predictions().fetch().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[test]
fn repeated_fetches_are_identical() {
    let server = MockServer::start();
    let client = server.client();

    let first = client.predictions().fetch().unwrap();
    let second = client.predictions().fetch().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.unwrap().len(), 3);
    assert_eq!(server.state.hits("/data/predict"), 2);
}
