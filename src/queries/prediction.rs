//! Forecast series from `/data/predict`.

use std::time::Instant;

use serde_json::Value;

use crate::config::PREDICT_PATH;
use crate::error::{Result, TeaCastError};
use crate::models::PredictionResult;
use crate::policy::FailurePolicy;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// PredictionQuery
// ---------------------------------------------------------------------------

pub struct PredictionQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> PredictionQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Fetch the current forecast.
    ///
    /// Returns `Ok(None)` when the server reports `prediction: null` (no
    /// forecast yet), the points unchanged when it sends a sequence, and a
    /// [`TeaCastError::Validation`] when the field is missing. Transport
    /// errors are returned unchanged.
    pub fn fetch(&self) -> Result<PredictionResult> {
        let start = Instant::now();
        tracing::debug!(operation = "fetch_prediction", path = PREDICT_PATH, "Fetching predictions");

        let outcome = self.transport.get(PREDICT_PATH).and_then(parse_prediction);

        if let Ok(result) = &outcome {
            tracing::info!(
                operation = "fetch_prediction",
                points = result.as_ref().map_or(0, Vec::len),
                available = result.is_some(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Predictions fetched"
            );
        }
        FailurePolicy::Propagate.resolve("fetch_prediction", outcome)
    }
}

/// Classify a decoded `/data/predict` body.
pub fn parse_prediction(body: Value) -> Result<PredictionResult> {
    let mut map = match body {
        Value::Object(map) => map,
        other => {
            return Err(TeaCastError::Validation(format!(
                "Invalid API response format: expected an object, got {other}"
            )))
        }
    };

    match map.remove("prediction") {
        None => Err(TeaCastError::Validation(
            "Invalid API response format: missing `prediction` field".into(),
        )),
        Some(Value::Null) => Ok(None),
        Some(points @ Value::Array(_)) => Ok(Some(serde_json::from_value(points)?)),
        Some(other) => Err(TeaCastError::Validation(format!(
            "Invalid API response format: `prediction` is not a sequence: {other}"
        ))),
    }
}
