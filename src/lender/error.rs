use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use super::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum LenderError {
    #[error("Failed to create loan: {0}")]
    Store(#[from] RepositoryError),
}

impl LenderError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LenderError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the client is told. Storage details stay in the log.
    pub fn public_message(&self) -> &'static str {
        match self {
            LenderError::Store(_) => "Failed to create loan",
        }
    }
}

impl IntoResponse for LenderError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        let body = json!({ "message": self.public_message() });
        (self.status_code(), Json(body)).into_response()
    }
}
