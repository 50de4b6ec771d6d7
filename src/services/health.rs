//! Converter service health probe.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::types::{AppError, AppResult};

/// Payload of the converter's `GET /health` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    /// Whether the service reported itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Query the converter's health endpoint.
///
/// Used once at startup to drive the header's service badge; callers
/// treat any error as "offline".
pub async fn fetch_health() -> AppResult<HealthStatus> {
    let url = format!("{}{}", config::BACKEND_URL, config::HEALTH_PATH);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Server {
            status: response.status(),
            message: "health endpoint unavailable".to_string(),
        });
    }

    response
        .json::<HealthStatus>()
        .await
        .map_err(|e| AppError::Network(format!("failed to parse health payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_payload_deserializes() {
        // Exact shape the service writes
        let json = r#"{"status":"ok","service":"nimby-shapetopoi"}"#;

        let health: HealthStatus = serde_json::from_str(json).unwrap();
        assert_eq!(health.service, "nimby-shapetopoi");
        assert!(health.is_ok());
    }

    #[test]
    fn health_not_ok_for_other_statuses() {
        let health = HealthStatus {
            status: "degraded".to_string(),
            service: "nimby-shapetopoi".to_string(),
        };
        assert!(!health.is_ok());
    }
}
