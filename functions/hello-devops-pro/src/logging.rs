//! Tracing setup driven by the Lambda advanced logging controls.
//!
//! `RUST_LOG` takes precedence over `AWS_LAMBDA_LOG_LEVEL` so filters can be
//! tuned per module while debugging. `AWS_LAMBDA_LOG_FORMAT=JSON` switches
//! the output to one JSON object per line.

use std::env;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: Level,
    pub directives: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: Level::INFO,
            directives: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("AWS_LAMBDA_LOG_FORMAT") {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let level = lookup("AWS_LAMBDA_LOG_LEVEL")
            .and_then(|l| l.trim().parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        let directives = lookup("RUST_LOG").filter(|d| !d.trim().is_empty());

        Self {
            format,
            level,
            directives,
        }
    }

    fn filter(&self) -> EnvFilter {
        self.directives
            .as_deref()
            .and_then(|d| EnvFilter::try_new(d).ok())
            .unwrap_or_else(|| EnvFilter::new(self.level.as_str()))
    }
}

/// Installs the global subscriber. Calling it again is harmless: the second
/// subscriber is simply not installed.
pub fn init(config: &LogConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        // CloudWatch stamps every line on ingestion.
        .without_time()
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Text => builder.with_ansi(false).try_init(),
    };
}
