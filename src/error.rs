use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Detection service base URL is not configured")]
    MissingBaseUrl,

    #[error("Invalid request payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("Failed to serialize detection request: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Detection service request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Failed to read detection service response: {0}")]
    UpstreamRead(#[source] reqwest::Error),

    #[error("Failed to decode detection service response: {0}")]
    UpstreamDecode(#[source] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Status code written to the caller for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Static message written to the caller. Never includes the underlying cause.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingBaseUrl => "FASTAPI_URL environment variable not set",
            Self::InvalidPayload(_) => "Invalid request payload",
            Self::Serialization(_) => "Failed to marshal request payload",
            Self::Network(_) => "Failed to communicate with detection service",
            Self::UpstreamRead(_) => "Failed to read response from detection service",
            Self::UpstreamDecode(_) => "Failed to parse response from detection service",
            Self::Config(_) | Self::Yaml(_) | Self::Io(_) | Self::AddrParse(_) => {
                "Internal server error"
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
