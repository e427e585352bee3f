use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Body for `GET /health`.
pub async fn report(service: &'static str) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: service.to_string(),
    })
}
