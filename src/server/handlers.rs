use super::types::HealthResponse;
use crate::{
    Error, Result,
    detection::{DetectionClient, DetectionRequest, DetectionResponse, PromptRequest},
};
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no detection service is configured; every relay call then fails.
    pub base_url: Option<Arc<str>>,
    pub detector: Arc<dyn DetectionClient>,
}

impl AppState {
    pub fn new(base_url: Option<String>, detector: Arc<dyn DetectionClient>) -> Self {
        Self {
            base_url: base_url.map(Arc::from),
            detector,
        }
    }
}

/// `POST /detect`: forwards the prompt to the detection service and relays its answer.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn detect(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DetectionResponse>> {
    match relay(&state, &body).await {
        Ok(response) => {
            info!(
                anomaly = response.anomaly.as_deref().unwrap_or(""),
                "Relayed detection response"
            );
            Ok(Json(response))
        }
        Err(e) => {
            if e.status_code().is_client_error() {
                warn!("Rejected relay request: {}", e);
            } else {
                error!("Relay request failed: {}", e);
            }
            Err(e)
        }
    }
}

async fn relay(state: &AppState, body: &[u8]) -> Result<DetectionResponse> {
    let base_url = state.base_url.as_deref().ok_or(Error::MissingBaseUrl)?;

    let prompt: PromptRequest = serde_json::from_slice(body).map_err(Error::InvalidPayload)?;

    state
        .detector
        .detect_anomalies(base_url, DetectionRequest::from(prompt))
        .await
}

/// `OPTIONS /detect`: the CORS headers are added by the router layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
