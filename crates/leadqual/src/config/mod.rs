use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::scoring::weights::WeightOverrides;

/// Runtime stage of the service, for log annotation and environment-specific
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration, assembled from the process environment (a `.env`
/// file is honored when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    /// Weight overrides from `SCORE_WEIGHT_*` variables; empty means the
    /// built-in default table.
    pub scoring: WeightOverrides,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&env_or("APP_ENV", "development"));

        let port = env_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let server = ServerConfig {
            host: env_or("APP_HOST", "127.0.0.1"),
            port,
        };

        let telemetry = TelemetryConfig {
            log_level: env_or("APP_LOG_LEVEL", "info"),
        };

        let scoring = WeightOverrides {
            role_fit: weight_from_env("SCORE_WEIGHT_ROLE_FIT")?,
            company_intent: weight_from_env("SCORE_WEIGHT_COMPANY_INTENT")?,
            tech_fit: weight_from_env("SCORE_WEIGHT_TECH_FIT")?,
            nams: weight_from_env("SCORE_WEIGHT_NAMS")?,
            location: weight_from_env("SCORE_WEIGHT_LOCATION")?,
            publication: weight_from_env("SCORE_WEIGHT_PUBLICATION")?,
        };

        Ok(Self {
            environment,
            server,
            telemetry,
            scoring,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn weight_from_env(name: &'static str) -> Result<Option<u32>, ConfigError> {
    let Ok(value) = env::var(name) else {
        return Ok(None);
    };
    value
        .trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidWeight { name })
}

/// HTTP listener binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost { source })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidWeight { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must be an IP address or 'localhost'")
            }
            ConfigError::InvalidWeight { name } => {
                write!(f, "{name} must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::InvalidWeight { .. } => None,
        }
    }
}
