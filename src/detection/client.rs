use super::types::{DetectionRequest, DetectionResponse};
use crate::{Error, Result, config::DetectionConfig};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, warn};

pub const DETECT_ANOMALIES_PATH: &str = "/detect_anomalies/";

#[async_trait]
pub trait DetectionClient: Send + Sync {
    async fn detect_anomalies(
        &self,
        base_url: &str,
        request: DetectionRequest,
    ) -> Result<DetectionResponse>;
}

/// Joins the configured base URL with the detection endpoint path.
pub fn detect_anomalies_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), DETECT_ANOMALIES_PATH)
}

pub struct HttpDetectionClient {
    client: reqwest::Client,
}

impl HttpDetectionClient {
    pub fn new(config: &DetectionConfig) -> Result<Self> {
        Self::with_timeout(config.timeout())
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DetectionClient for HttpDetectionClient {
    async fn detect_anomalies(
        &self,
        base_url: &str,
        request: DetectionRequest,
    ) -> Result<DetectionResponse> {
        let body = serde_json::to_vec(&request).map_err(Error::Serialization)?;
        let url = detect_anomalies_url(base_url);

        debug!("Forwarding {} byte prompt to {}", request.text.len(), url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(Error::Network)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Detection service answered with status {}", status);
        }

        let bytes = response.bytes().await.map_err(Error::UpstreamRead)?;
        let detection = serde_json::from_slice(&bytes).map_err(Error::UpstreamDecode)?;

        Ok(detection)
    }
}
