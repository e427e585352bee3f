use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use super::bank_link::BankLinkError;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Link token creation failed: {0}")]
    LinkToken(#[source] BankLinkError),

    #[error("Public token exchange failed: {0}")]
    Exchange(#[source] BankLinkError),
}

impl PortalError {
    pub fn public_message(&self) -> &'static str {
        match self {
            PortalError::LinkToken(_) => "Failed to create Plaid link token",
            PortalError::Exchange(_) => "Failed during Plaid integration",
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Bank-link request failed");
        let body = json!({ "error": self.public_message() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
