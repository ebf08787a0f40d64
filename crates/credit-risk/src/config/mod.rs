use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::underwriting::{RiskThreshold, ScoringConfig, ZeroIncomePolicy};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub artifacts: ArtifactConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let directory = env::var("RISK_ARTIFACT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("artifacts"));
        let vehicle_catalog = env::var("RISK_VEHICLE_CATALOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let threshold = match env::var("RISK_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => RiskThreshold::default(),
        };
        let zero_income_policy = match env::var("RISK_ZERO_INCOME_POLICY") {
            Ok(raw) => ZeroIncomePolicy::parse(&raw)
                .ok_or(ConfigError::InvalidZeroIncomePolicy { value: raw })?,
            Err(_) => ZeroIncomePolicy::default(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            artifacts: ArtifactConfig {
                directory,
                vehicle_catalog,
            },
            scoring: ScoringConfig {
                threshold,
                zero_income_policy,
            },
        })
    }
}

/// Parse a decision threshold, accepting only values inside `[0, 1]`.
pub fn parse_threshold(raw: &str) -> Result<RiskThreshold, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(RiskThreshold::new)
        .ok_or_else(|| ConfigError::InvalidThreshold {
            value: raw.to_string(),
        })
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Location of the trained classifier, scaler and encoders.
#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    pub directory: PathBuf,
    pub vehicle_catalog: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { value: String },
    InvalidZeroIncomePolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { value } => write!(
                f,
                "RISK_THRESHOLD must be a number between 0 and 1, got '{}'",
                value
            ),
            ConfigError::InvalidZeroIncomePolicy { value } => write!(
                f,
                "RISK_ZERO_INCOME_POLICY must be 'undefined' or 'zero', got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidThreshold { .. }
            | ConfigError::InvalidZeroIncomePolicy { .. } => None,
        }
    }
}
