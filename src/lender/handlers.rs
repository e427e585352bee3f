use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::LenderError;
use super::repository::LoanRepository;
use crate::server::health;

pub const LOANS_COLLECTION: &str = "Loans";

#[derive(Clone)]
pub struct LenderState {
    repository: Arc<dyn LoanRepository>,
}

impl LenderState {
    pub fn new(repository: Arc<dyn LoanRepository>) -> Self {
        Self { repository }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBody {
    pub message: String,
    pub id: String,
}

pub fn build_router(state: LenderState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(|| health::report("lender")))
        .route("/api/loans", post(create_loan))
        .with_state(state)
}

async fn index() -> &'static str {
    "Hello from the Lender Service!"
}

/// Store the posted form as-is in the `Loans` collection.
async fn create_loan(
    State(state): State<LenderState>,
    Json(loan): Json<Value>,
) -> Result<(StatusCode, Json<CreatedBody>), LenderError> {
    let id = state.repository.store(LOANS_COLLECTION, loan).await?;
    tracing::info!(%id, "New loan document saved");
    Ok((
        StatusCode::CREATED,
        Json(CreatedBody {
            message: "Loan created successfully".to_string(),
            id,
        }),
    ))
}
