use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// AuctionPriceEntry: one lot on the auction ticker
// ---------------------------------------------------------------------------

/// Display-ready auction price. `price` is kept as the formatted string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionPriceEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "display_string")]
    pub price: String,
}

impl AuctionPriceEntry {
    pub fn new(name: impl Into<String>, date: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            price: price.into(),
        }
    }
}

/// Accept either a preformatted string or a bare number.
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected price string or number, got {other}"
        ))),
    }
}
