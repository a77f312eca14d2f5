//! Forecast chart/table page.

use std::fmt::Write;
use std::sync::Arc;

use super::{Loader, ViewState};
use crate::models::PredictionPoint;
use crate::TeaCastClient;

pub const PREDICTION_FAILED: &str = "Failed to load prediction data";
pub const NO_PREDICTIONS: &str = "No predictions available yet.";

#[derive(Default)]
pub struct PredictionView {
    loader: Loader<Vec<PredictionPoint>>,
}

impl PredictionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, client: &Arc<TeaCastClient>) {
        let client = Arc::clone(client);
        self.loader.start(move || match client.predictions().fetch() {
            Ok(Some(points)) if !points.is_empty() => ViewState::Ready(points),
            Ok(_) => ViewState::Empty,
            Err(_) => ViewState::Failed(PREDICTION_FAILED.to_string()),
        });
    }

    pub fn poll(&mut self) -> bool {
        self.loader.poll()
    }

    pub fn wait(&mut self) -> &ViewState<Vec<PredictionPoint>> {
        self.loader.wait()
    }

    pub fn unmount(&mut self) {
        self.loader.cancel();
    }

    pub fn state(&self) -> &ViewState<Vec<PredictionPoint>> {
        self.loader.state()
    }

    /// `(auction label, "LKR 1250.75")` pairs in server order.
    pub fn table_rows(&self) -> Vec<(String, String)> {
        self.state()
            .data()
            .map(|points| {
                points
                    .iter()
                    .map(|p| (p.label(), format_price(p.price())))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        match self.state() {
            ViewState::Loading => {
                let _ = writeln!(out, "Loading prediction data...");
            }
            ViewState::Failed(msg) => {
                let _ = writeln!(out, "{msg}");
            }
            ViewState::Empty => {
                let _ = writeln!(out, "Tea Price Predictions");
                let _ = writeln!(out, "{NO_PREDICTIONS}");
            }
            ViewState::Ready(points) => {
                let _ = writeln!(out, "Tea Price Predictions");
                let _ = writeln!(out, "Price Prediction Trend (Western High - BOPF/BOPFSp)");
                if let (Some(first), Some(last)) = (points.first(), points.last()) {
                    let _ = writeln!(
                        out,
                        "  {} points, auction {} -> {}: {} -> {}",
                        points.len(),
                        first.label(),
                        last.label(),
                        format_price(first.price()),
                        format_price(last.price())
                    );
                }
                let _ = writeln!(out, "\nDetailed Predictions");
                let _ = writeln!(out, "{:<16} | Predicted Price (LKR)", "Auction Number");
                for (label, price) in self.table_rows() {
                    let _ = writeln!(out, "{label:<16} | {price}");
                }
            }
        }
        out
    }
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("LKR {value:.2}"),
        None => "-".to_string(),
    }
}
