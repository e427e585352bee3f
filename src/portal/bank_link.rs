//! Bank linking through Plaid.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::BankLinkConfig;

#[derive(Debug, Error)]
pub enum BankLinkError {
    #[error("Bank-link request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Bank-link API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Unexpected bank-link response: {0}")]
    InvalidResponse(String),

    #[error("Request is missing a public token")]
    MissingPublicToken,

    #[error("Linked item has no accounts")]
    NoAccounts,
}

/// The bank account details merged into a borrower profile after linking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    pub bank_name: String,
    pub account_holder_name: String,
    pub account_number: String,
}

#[async_trait]
pub trait BankLink: Send + Sync {
    /// Start a link flow. The provider's response is passed through untouched.
    async fn create_link_token(&self) -> Result<Value, BankLinkError>;

    /// Trade a public token for the first account on the linked item.
    async fn exchange_public_token(&self, public_token: &str)
        -> Result<LinkedAccount, BankLinkError>;
}

#[derive(Deserialize)]
struct ExchangeResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct AuthResponse {
    #[serde(default)]
    accounts: Vec<Account>,
}

#[derive(Deserialize)]
struct Account {
    account_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    owners: Vec<Owner>,
}

#[derive(Deserialize)]
struct Owner {
    #[serde(default)]
    names: Vec<String>,
}

pub struct PlaidClient {
    client: Client,
    base_url: String,
    client_id: Option<String>,
    secret: Option<String>,
    client_name: String,
    client_user_id: String,
    products: Vec<String>,
    country_codes: Vec<String>,
    language: String,
}

impl PlaidClient {
    pub fn new(config: &BankLinkConfig) -> Result<Self, BankLinkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()?;
        if config.client_id.is_none() || config.secret.is_none() {
            tracing::warn!("PLAID_CLIENT_ID / PLAID_SECRET not set, bank linking will fail");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            secret: config.secret.clone(),
            client_name: config.client_name.clone(),
            client_user_id: config.client_user_id.clone(),
            products: config.products.clone(),
            country_codes: config.country_codes.clone(),
            language: config.language.clone(),
        })
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, BankLinkError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).json(&body);
        if let Some(id) = &self.client_id {
            request = request.header("PLAID-CLIENT-ID", id);
        }
        if let Some(secret) = &self.secret {
            request = request.header("PLAID-SECRET", secret);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(BankLinkError::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }
        serde_json::from_str(&text).map_err(|e| BankLinkError::InvalidResponse(e.to_string()))
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, BankLinkError> {
    serde_json::from_value(value).map_err(|e| BankLinkError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl BankLink for PlaidClient {
    async fn create_link_token(&self) -> Result<Value, BankLinkError> {
        let body = json!({
            "user": { "client_user_id": self.client_user_id },
            "client_name": self.client_name,
            "products": self.products,
            "country_codes": self.country_codes,
            "language": self.language,
        });
        self.post("/link/token/create", body).await
    }

    async fn exchange_public_token(
        &self,
        public_token: &str,
    ) -> Result<LinkedAccount, BankLinkError> {
        if public_token.is_empty() {
            return Err(BankLinkError::MissingPublicToken);
        }

        let exchanged: ExchangeResponse = decode(
            self.post(
                "/item/public_token/exchange",
                json!({ "public_token": public_token }),
            )
            .await?,
        )?;

        let auth: AuthResponse = decode(
            self.post(
                "/auth/get",
                json!({ "access_token": exchanged.access_token }),
            )
            .await?,
        )?;

        let account = auth
            .accounts
            .into_iter()
            .next()
            .ok_or(BankLinkError::NoAccounts)?;
        let holder = account
            .owners
            .into_iter()
            .next()
            .and_then(|owner| owner.names.into_iter().next())
            .unwrap_or_else(|| "Not Available".to_string());

        Ok(LinkedAccount {
            bank_name: account.name,
            account_holder_name: holder,
            account_number: account.account_id,
        })
    }
}
