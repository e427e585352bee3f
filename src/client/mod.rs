//! Client side of `POST /api/loans`.

mod loans;

pub use loans::HttpLoanClient;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::ui::form::FormState;

/// Body of a `201 Created` from the lender service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoanCreated {
    #[serde(default)]
    pub message: String,
    pub id: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Connection to lender service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Lender service returned {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response from lender service: {0}")]
    InvalidResponse(String),
}

/// Something that can create a loan from a form snapshot.
#[async_trait]
pub trait LoanGateway: Send + Sync {
    async fn create_loan(&self, loan: &FormState) -> Result<LoanCreated, SubmitError>;
}
