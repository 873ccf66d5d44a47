use crate::assessment::{EmptyResponsePolicy, ScoringConfig};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of deployment.
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
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let synthetic = match env::var("APP_SYNTHETIC_FALLBACK") {
            Ok(raw) => parse_flag("APP_SYNTHETIC_FALLBACK", &raw)?,
            Err(_) => false,
        };

        let config = Self {
            environment,
            scoring: ScoringConfig::default(),
            telemetry: TelemetryConfig { log_level },
        };
        config.with_synthetic_fallback(synthetic)
    }

    /// Switches the empty-response policy, refusing synthetic data in
    /// production.
    pub fn with_synthetic_fallback(mut self, enabled: bool) -> Result<Self, ConfigError> {
        if enabled && self.environment == AppEnvironment::Production {
            return Err(ConfigError::SyntheticInProduction);
        }

        self.scoring.empty_response_policy = if enabled {
            EmptyResponsePolicy::Synthesize
        } else {
            EmptyResponsePolicy::Signal
        };
        Ok(self)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFlag { name: &'static str, value: String },
    SyntheticInProduction,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be a boolean flag, got '{value}'")
            }
            ConfigError::SyntheticInProduction => {
                write!(f, "synthetic fallback profiles cannot be enabled in production")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
