use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{LoanCreated, LoanGateway, SubmitError};
use crate::config::ClientConfig;
use crate::ui::form::FormState;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Talks to the lender service over HTTP.
#[derive(Clone)]
pub struct HttpLoanClient {
    client: Client,
    base_url: String,
}

impl HttpLoanClient {
    pub fn new(config: &ClientConfig) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.lender_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/loans", self.base_url)
    }
}

#[async_trait]
impl LoanGateway for HttpLoanClient {
    async fn create_loan(&self, loan: &FormState) -> Result<LoanCreated, SubmitError> {
        let url = self.endpoint();
        tracing::info!(%url, "Submitting loan");

        let response = self.client.post(&url).json(loan).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::CREATED {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| SubmitError::InvalidResponse(e.to_string()))
    }
}
