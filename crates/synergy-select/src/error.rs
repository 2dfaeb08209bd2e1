use crate::config::ConfigError;
use crate::team::{ParameterError, TransportError};
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Transport(TransportError),
    Parameters(ParameterError),
    Json(serde_json::Error),
    /// The generation request finished in the failed phase; holds the user-facing message.
    Generation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Transport(err) => write!(f, "transport error: {}", err),
            AppError::Parameters(err) => write!(f, "invalid parameters: {}", err),
            AppError::Json(err) => write!(f, "json error: {}", err),
            AppError::Generation(message) => write!(f, "team generation failed: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Transport(err) => Some(err),
            AppError::Parameters(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Generation(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<TransportError> for AppError {
    fn from(value: TransportError) -> Self {
        Self::Transport(value)
    }
}

impl From<ParameterError> for AppError {
    fn from(value: ParameterError) -> Self {
        Self::Parameters(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
