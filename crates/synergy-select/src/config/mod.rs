use std::env;
use std::fmt;

const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

/// Distinguishes runtime behavior for different stages of the client.
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

/// Top-level configuration for the client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub service: ServiceConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("SYNERGY_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url = env::var("SYNERGY_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
        let service = ServiceConfig::new(base_url)?;

        let log_level = env::var("SYNERGY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            service,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the generation service lives.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());

        if !has_host {
            return Err(ConfigError::InvalidServiceUrl { value: base_url });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidServiceUrl { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidServiceUrl { value } => write!(
                f,
                "SYNERGY_SERVICE_URL must be an http:// or https:// URL (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
