//! HTTP transport used by the fetcher

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use oracle_core::{FetchConfig, FetchError, FetchResult, OracleError, OracleResult};

/// Status and fully-read body of one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single GET, one attempt, no retries
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> FetchResult<HttpResponse>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &FetchConfig) -> OracleResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.request_timeout().min(Duration::from_secs(5)))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| OracleError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> FetchResult<HttpResponse> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = if response.status().is_success() {
            response.text().await.map_err(map_reqwest_error)?
        } else {
            // keep the status in the reason even if the error body is unreadable
            response.text().await.unwrap_or_default()
        };

        Ok(HttpResponse { status, body })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(e.to_string())
    }
}
