//! Logging setup for the `teacast` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application. Events go to stderr so rendered pages on stdout stay
//! clean.

use std::env;
use std::str::FromStr;

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_ENV: &str = "TEACAST_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "TEACAST_LOG_FORMAT";
pub const LOG_TARGET_ENV: &str = "TEACAST_LOG_TARGET";

const DEFAULT_FILTER: &str = "warn";
const CRATE_TARGET: &str = "teacast_sdk";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `warn,teacast_sdk=debug`.
    pub filter: String,
    pub format: LogFormat,
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Pretty,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset, blank or unrecognised values keep
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_LEVEL_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter.trim().to_string();
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV).and_then(|f| f.parse().ok()) {
            config.format = format;
        }
        if let Some(target) = lookup(LOG_TARGET_ENV).and_then(|t| parse_flag(&t)) {
            config.include_target = target;
        }
        config
    }

    /// Raise this crate's own events: `-v` to debug, `-vv` and up to trace.
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        let level = match verbose {
            0 => return self,
            1 => "debug",
            _ => "trace",
        };
        self.filter = format!("{},{CRATE_TARGET}={level}", self.filter);
        self
    }

    /// Install the global subscriber. Fails if one is already set.
    pub fn init(&self) -> Result<(), SetGlobalDefaultError> {
        let filter = EnvFilter::try_new(&self.filter).unwrap_or_else(|e| {
            eprintln!("invalid {LOG_LEVEL_ENV} {:?}: {e}; using {DEFAULT_FILTER}", self.filter);
            EnvFilter::new(DEFAULT_FILTER)
        });
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(self.include_target)
            .with_writer(std::io::stderr);

        match self.format {
            LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
            LogFormat::Pretty => tracing::subscriber::set_global_default(builder.finish()),
        }
    }
}

/// First event of a CLI run: which command against which origin.
pub fn log_startup(config: &LoggingConfig, command: &str, base_url: &str) {
    tracing::info!(
        command,
        base_url,
        version = env!("CARGO_PKG_VERSION"),
        filter = %config.filter,
        "teacast starting"
    );
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
