//! Breach lookup provider.
//!
//! Talks to the LeakCheck public API:
//!
//! - `GET {base}/api/public?check=VALUE`: look up one identifier

use crate::error::UpstreamError;
use crate::models::ProviderResponse;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait BreachProvider: Send + Sync {
    /// Run one lookup. No retries; the first failure is returned.
    async fn lookup(&self, value: &str) -> Result<ProviderResponse, UpstreamError>;
}

#[derive(Debug, Clone)]
pub struct LeakCheckProvider {
    client: reqwest::Client,
    base_url: String,
}

impl LeakCheckProvider {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(LeakCheckProvider {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/public", self.base_url)
    }
}

#[async_trait]
impl BreachProvider for LeakCheckProvider {
    async fn lookup(&self, value: &str) -> Result<ProviderResponse, UpstreamError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("check", value)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let raw = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        Ok(ProviderResponse::from_raw(raw)?)
    }
}
