pub mod client;
pub mod types;

pub use client::{DetectionClient, HttpDetectionClient, detect_anomalies_url};
pub use types::*;
