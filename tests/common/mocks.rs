use async_trait::async_trait;
use prompt_relay::{
    Error, Result,
    detection::{DetectionClient, DetectionRequest, DetectionResponse},
};
use std::sync::{Arc, Mutex};

/// Mock detection client that records every call it receives
#[derive(Debug, Clone)]
pub struct MockDetectionClient {
    pub calls: Arc<Mutex<Vec<(String, DetectionRequest)>>>,
    pub response: Option<DetectionResponse>,
    pub echo: bool,
}

impl MockDetectionClient {
    /// A client that fails every call as if the service were unreachable
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: None,
            echo: false,
        }
    }

    /// Answers every call with `generated_text` set to the forwarded text
    pub fn echoing() -> Self {
        Self {
            echo: true,
            ..Self::new()
        }
    }

    pub fn with_response(mut self, response: DetectionResponse) -> Self {
        self.response = Some(response);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<(String, DetectionRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DetectionClient for MockDetectionClient {
    async fn detect_anomalies(
        &self,
        base_url: &str,
        request: DetectionRequest,
    ) -> Result<DetectionResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((base_url.to_string(), request.clone()));

        if self.echo {
            return Ok(DetectionResponse {
                generated_text: request.text,
                anomaly: None,
                warning: None,
                sensitive_data: None,
            });
        }

        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(Error::UpstreamDecode(
                serde_json::from_str::<DetectionResponse>("{}").unwrap_err(),
            )),
        }
    }
}

impl Default for MockDetectionClient {
    fn default() -> Self {
        Self::new()
    }
}
