//! Shared fixtures for the TeaCast SDK integration tests.
//!
//! Provides `MockServer::start()`, an axum server on an ephemeral port that
//! mirrors the four API endpoints. Each test owns its server and can switch
//! what an endpoint returns through `MockServer::state`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use teacast_sdk::TeaCastClient;

// ---------------------------------------------------------------------------
// Reply
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, Value),
    Text(u16, &'static str),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(body) => (StatusCode::OK, Json(body)).into_response(),
            Reply::Status(code, body) => (status(code), Json(body)).into_response(),
            Reply::Text(code, body) => (status(code), body).into_response(),
        }
    }
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn prediction_fixture() -> Value {
    json!({
        "prediction": [
            {"Auction_Number": 1, "Final_Prediction": 1250.75},
            {"Auction_Number": 2, "Final_Prediction": 1262.1},
            {"Auction_Number": 3, "Final_Prediction": 1271.4}
        ]
    })
}

pub fn auction_fixture() -> Value {
    json!({
        "average_prices": [
            {"name": "Ceylon Black Tea", "date": "2023-01-15", "price": "$4.50"}
        ]
    })
}

/// Four priority categories and one other, keys deliberately out of
/// priority order.
pub fn dashboard_fixture() -> Value {
    json!({
        "tea_price_data": {
            "tea_prices": [
                {"date": "2024-01-05", "price": 1150.0},
                {"date": "2024-01-12", "price": 1162.5}
            ],
            "usd_rates": [
                {"date": "2024-01-01", "rate": 323.4},
                {"date": "2024-02-01", "rate": 318.9}
            ],
            "crude_oil_prices": [
                {"date": "2024-01-01", "price": 24150.0}
            ]
        },
        "all_average_price_data": {
            "UVA HIGH": {"average_price": 1190.5, "date": "2024-03-01"},
            "OFF GRADES": {"average_price": 640.0, "date": "2024-03-01"},
            "LOW GROWNS": {"average_price": 1402.0, "date": "2024-03-01"},
            "WESTERN HIGH": {"average_price": 1120.0, "date": "2024-03-01"},
            "WESTERN MEDIUM": {"average_price": 1010.25, "date": "2024-03-01"}
        }
    })
}

// ---------------------------------------------------------------------------
// MockState
// ---------------------------------------------------------------------------

pub struct MockState {
    pub prediction: Mutex<Reply>,
    pub auction: Mutex<Reply>,
    pub dashboard: Mutex<Reply>,
    hits: Mutex<HashMap<String, usize>>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            prediction: Mutex::new(Reply::Json(prediction_fixture())),
            auction: Mutex::new(Reply::Json(auction_fixture())),
            dashboard: Mutex::new(Reply::Json(dashboard_fixture())),
            hits: Mutex::new(HashMap::new()),
        }
    }
}

impl MockState {
    fn hit(&self, path: &str) {
        *self.hits.lock().unwrap().entry(path.to_string()).or_default() += 1;
    }

    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    pub fn set_prediction(&self, reply: Reply) {
        *self.prediction.lock().unwrap() = reply;
    }

    pub fn set_auction(&self, reply: Reply) {
        *self.auction.lock().unwrap() = reply;
    }

    pub fn set_dashboard(&self, reply: Reply) {
        *self.dashboard.lock().unwrap() = reply;
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `testuser`/`password` succeeds, `locked` gets a 2xx with `success: false`,
/// anything else is a 401.
async fn login(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.hit("/login");
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let reply = match (username, password) {
        ("testuser", "password") => Reply::Json(json!({
            "success": true,
            "token": "fake-jwt-token",
            "role": "admin",
            "user": {"id": 1, "username": "testuser"}
        })),
        ("locked", _) => Reply::Json(json!({"success": false, "message": "Account locked"})),
        _ => Reply::Status(401, json!({"success": false, "message": "Invalid credentials"})),
    };
    reply.into_response()
}

async fn predict(State(state): State<Arc<MockState>>) -> Response {
    state.hit("/data/predict");
    let reply = state.prediction.lock().unwrap().clone();
    reply.into_response()
}

async fn auction_prices(State(state): State<Arc<MockState>>) -> Response {
    state.hit("/data/tea-auction-price");
    let reply = state.auction.lock().unwrap().clone();
    reply.into_response()
}

async fn dashboard(State(state): State<Arc<MockState>>) -> Response {
    state.hit("/data/dashboard");
    let reply = state.dashboard.lock().unwrap().clone();
    reply.into_response()
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/data/predict", get(predict))
        .route("/data/tea-auction-price", get(auction_prices))
        .route("/data/dashboard", get(dashboard))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// MockServer
// ---------------------------------------------------------------------------

pub struct MockServer {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockServer {
    /// Serve the default fixtures on a background thread with its own runtime.
    pub fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = router(Arc::clone(&state));
        let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();

        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                addr_tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        let addr = addr_rx.recv().unwrap();
        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn client(&self) -> TeaCastClient {
        TeaCastClient::builder()
            .base_url(&self.base_url)
            .build()
            .unwrap()
    }
}

/// A client pointed at a port nobody listens on.
pub fn unreachable_client() -> TeaCastClient {
    let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    TeaCastClient::builder()
        .base_url(format!("http://{addr}"))
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap()
}
