use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Tea grades shown first on the dashboard, in this exact order.
pub const PRIORITY_CATEGORIES: [&str; 9] = [
    "WESTERN MEDIUM",
    "WESTERN HIGH",
    "NUWARA ELIYAS",
    "UDAPUSSELLAWAS",
    "LOW GROWNS",
    "UVA MEDIUM",
    "UVA HIGH",
    "UNORTHODOX HIGH",
    "UNORTHODOX LOW",
];

// ---------------------------------------------------------------------------
// Series points
// ---------------------------------------------------------------------------

/// A point on a price series. Either field may be missing or `null` on the
/// wire; points without a price are skipped when charted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rate: Option<f64>,
}

// ---------------------------------------------------------------------------
// TeaPriceData: the three trend series
// ---------------------------------------------------------------------------

/// A series that is absent, `null` or not a list reads as empty; elements
/// that are not objects are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeaPriceData {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub tea_prices: Vec<PricePoint>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub usd_rates: Vec<RatePoint>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub crude_oil_prices: Vec<PricePoint>,
}

// ---------------------------------------------------------------------------
// CategoryAverage / CategoryTile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverage {
    pub average_price: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
}

/// One price tile on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTile {
    pub name: String,
    pub average_price: f64,
    pub date: String,
}

impl CategoryTile {
    fn new(name: &str, avg: CategoryAverage) -> Self {
        Self {
            name: name.replace('_', " "),
            average_price: avg.average_price,
            date: avg.date,
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardBundle: aggregated analytics payload
// ---------------------------------------------------------------------------

/// Decoded `/data/dashboard` body.
///
/// Every sub-field is optional on the wire and a sub-field of the wrong
/// type reads as empty, so a partial body still renders what it has.
/// `all_average_price_data` keeps
/// the server's key order, which is the order "other" categories render in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardBundle {
    #[serde(default, deserialize_with = "lenient")]
    pub tea_price_data: TeaPriceData,
    #[serde(default, deserialize_with = "lenient")]
    pub all_average_price_data: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DashboardBundle {
    /// Decode a `/data/dashboard` body. Anything but an object yields an
    /// empty bundle.
    pub fn from_body(body: Value) -> crate::Result<Self> {
        match body {
            body @ Value::Object(_) => Ok(serde_json::from_value(body)?),
            other => {
                tracing::warn!(body = %other, "Dashboard body is not an object; treating as empty");
                Ok(Self::default())
            }
        }
    }

    /// Look up one category's average. Entries without a numeric
    /// `average_price` are treated as absent.
    pub fn category(&self, name: &str) -> Option<CategoryAverage> {
        self.all_average_price_data
            .get(name)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// All decodable categories in discovery order.
    pub fn categories(&self) -> Vec<(String, CategoryAverage)> {
        self.all_average_price_data
            .keys()
            .filter_map(|name| self.category(name).map(|avg| (name.clone(), avg)))
            .collect()
    }

    /// Split categories into priority tiles (fixed order, missing ones
    /// skipped) and the remaining tiles (discovery order).
    pub fn partition_categories(&self) -> (Vec<CategoryTile>, Vec<CategoryTile>) {
        let priority = PRIORITY_CATEGORIES
            .iter()
            .filter_map(|name| self.category(name).map(|avg| CategoryTile::new(name, avg)))
            .collect();

        let others = self
            .categories()
            .into_iter()
            .filter(|(name, _)| !PRIORITY_CATEGORIES.contains(&name.as_str()))
            .map(|(name, avg)| CategoryTile::new(&name, avg))
            .collect();

        (priority, others)
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
