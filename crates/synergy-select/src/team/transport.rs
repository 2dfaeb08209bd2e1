use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::domain::GenerationRequest;

pub const GENERATE_PATH: &str = "/api/v1/team/generate";
pub const HEALTH_PATH: &str = "/api/v1/health";

/// Raw reply from the generation service, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ServiceResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the lifecycle controller and the network so the controller can be
/// exercised without a live service.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<ServiceResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("generation service unreachable at {0}")]
    Unreachable(String),
}

impl TransportError {
    /// Connection failures mean the service is down or the URL is wrong; anything
    /// else that fails while sending keeps the underlying `reqwest` error.
    fn from_send(url: &str, source: reqwest::Error) -> Self {
        if source.is_connect() {
            Self::Unreachable(url.to_string())
        } else {
            Self::Request {
                url: url.to_string(),
                source,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// `reqwest`-backed transport talking to the generation service over HTTP.
///
/// No client-side timeout is configured; a hung service leaves the request pending
/// until the connection itself gives up.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    base_url: String,
    http: Client,
}

impl HttpGenerationClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let http = Client::builder()
            .build()
            .map_err(TransportError::ClientBuild)?;
        Ok(Self::with_client(base_url, http))
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn generate_url(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_PATH)
    }

    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| TransportError::from_send(&url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|source| TransportError::Request { url, source })
    }
}

#[async_trait]
impl GenerationTransport for HttpGenerationClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<ServiceResponse, TransportError> {
        let url = self.generate_url();
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| TransportError::from_send(&url, source))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Request { url, source })?;

        Ok(ServiceResponse::new(status, body.to_vec()))
    }
}
