use serde::{Deserialize, Serialize};

/// Body posted by the chat frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// Body the detection service expects at `/detect_anomalies/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRequest {
    pub text: String,
}

impl From<PromptRequest> for DetectionRequest {
    fn from(request: PromptRequest) -> Self {
        Self {
            text: request.prompt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub generated_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive_data: Option<Vec<SensitiveEntity>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitiveEntity {
    pub entity: String,
    pub value: String,
}
