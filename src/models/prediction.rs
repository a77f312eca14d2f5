use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// PredictionPoint: one forecast sample
// ---------------------------------------------------------------------------

/// A single forecast sample, kept exactly as the server sent it.
///
/// The auction-indexed shape (`Auction_Number`, `Final_Prediction`) is what
/// the forecast service currently returns; the dated shape (`date`, `price`)
/// is still read for older deployments. Any other fields ride along.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionPoint(Map<String, Value>);

impl PredictionPoint {
    pub fn auction(auction_number: i64, final_prediction: f64) -> Self {
        let mut fields = Map::new();
        fields.insert("Auction_Number".into(), auction_number.into());
        fields.insert("Final_Prediction".into(), final_prediction.into());
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn auction_number(&self) -> Option<f64> {
        self.0.get("Auction_Number").and_then(Value::as_f64)
    }

    pub fn final_prediction(&self) -> Option<f64> {
        self.0.get("Final_Prediction").and_then(Value::as_f64)
    }

    pub fn date(&self) -> Option<&str> {
        self.0.get("date").and_then(Value::as_str)
    }

    /// Axis label: the auction number, or the date for legacy samples.
    pub fn label(&self) -> String {
        match self.0.get("Auction_Number") {
            Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => i.to_string(),
                (None, Some(f)) if f.fract() == 0.0 => format!("{f:.0}"),
                _ => n.to_string(),
            },
            Some(Value::String(s)) => s.clone(),
            _ => self.date().unwrap_or_default().to_string(),
        }
    }

    /// Predicted price, from `Final_Prediction` or the legacy `price`.
    pub fn price(&self) -> Option<f64> {
        self.final_prediction()
            .or_else(|| self.0.get("price").and_then(Value::as_f64))
    }
}

/// `None` means the server has no forecast yet; that is not an error.
pub type PredictionResult = Option<Vec<PredictionPoint>>;
