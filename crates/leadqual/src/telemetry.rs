use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { value: String, source: ParseError },
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { value, .. } => {
                write!(f, "'{value}' is not a valid log level or filter directive")
            }
            TelemetryError::Init(err) => write!(f, "could not install tracing subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

/// Install the global tracing subscriber. A `RUST_LOG` directive wins over
/// the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(&config.log_level)?)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Init)
}

fn resolve_filter(fallback: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(fallback).map_err(|source| TelemetryError::Filter {
        value: fallback.to_string(),
        source,
    })
}
