use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TeaCastError};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_URL_ENV: &str = "TEACAST_API_URL";
pub const TIMEOUT_ENV: &str = "TEACAST_TIMEOUT_SECS";

// Endpoint paths, relative to the configured origin.
pub const LOGIN_PATH: &str = "/login";
pub const PREDICT_PATH: &str = "/data/predict";
pub const AUCTION_PRICE_PATH: &str = "/data/tea-auction-price";
pub const DASHBOARD_PATH: &str = "/data/dashboard";

/// Resolve the API origin: explicit value, then `TEACAST_API_URL`, then the default.
pub fn resolve_base_url(explicit: Option<&str>) -> Result<String> {
    let raw = match explicit {
        Some(url) => url.to_string(),
        None => env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    };
    normalize_base_url(&raw)
}

/// Validate an origin and strip trailing slashes so paths can be appended verbatim.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(trimmed)
        .map_err(|e| TeaCastError::InvalidArgument(format!("Invalid API URL '{raw}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(TeaCastError::InvalidArgument(format!(
            "Unsupported URL scheme '{other}' in '{raw}'"
        ))),
    }
}

/// Resolve the request timeout: explicit value, then `TEACAST_TIMEOUT_SECS`, then 30s.
pub fn resolve_timeout(explicit: Option<Duration>) -> Duration {
    explicit
        .or_else(|| {
            env::var(TIMEOUT_ENV)
                .ok()
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
        })
        .unwrap_or(DEFAULT_TIMEOUT)
}

pub fn default_session_path() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("teacast").join("session.json")
    } else {
        PathBuf::from(".teacast").join("session.json")
    }
}
