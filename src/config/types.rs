use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::format::{CurrencyMask, DEFAULT_MAX_AMOUNT};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lender: LenderConfig,
    #[serde(default)]
    pub portal: PortalConfig,
    #[serde(default)]
    pub bank_link: BankLinkConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub form: FormConfig,
}

/// Lender service: receives and stores loan documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LenderConfig {
    /// Bind address (host:port).
    #[serde(default = "default_lender_bind_addr")]
    pub bind_addr: String,
    /// Directory for stored loan documents. In-memory when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Borrower portal service: mock profile data and bank linking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default = "default_portal_bind_addr")]
    pub bind_addr: String,
}

/// Bank-link (Plaid) API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankLinkConfig {
    #[serde(default = "default_bank_link_base_url")]
    pub base_url: String,
    /// Overridden by `PLAID_CLIENT_ID`.
    #[serde(default)]
    pub client_id: Option<String>,
    /// Overridden by `PLAID_SECRET`.
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default = "default_client_name")]
    pub client_name: String,
    #[serde(default = "default_client_user_id")]
    pub client_user_id: String,
    #[serde(default = "default_products")]
    pub products: Vec<String>,
    #[serde(default = "default_country_codes")]
    pub country_codes: Vec<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// How the form reaches the lender service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_lender_url")]
    pub lender_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Input rules for the loan form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_allow_cents")]
    pub allow_cents: bool,
    #[serde(default = "default_max_amount")]
    pub max_amount: f64,
}

impl FormConfig {
    pub fn currency_mask(&self) -> CurrencyMask {
        CurrencyMask::new(self.allow_cents, self.max_amount)
    }
}

fn default_lender_bind_addr() -> String {
    "127.0.0.1:3002".to_string()
}

fn default_portal_bind_addr() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_bank_link_base_url() -> String {
    "https://sandbox.plaid.com".to_string()
}

fn default_client_name() -> String {
    "Portola Borrower Portal".to_string()
}

fn default_client_user_id() -> String {
    "user-id-from-your-db".to_string()
}

fn default_products() -> Vec<String> {
    vec!["auth".to_string()]
}

fn default_country_codes() -> Vec<String> {
    vec!["US".to_string()]
}

fn default_language() -> String {
    "en".to_string()
}

fn default_lender_url() -> String {
    "http://localhost:3002".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_allow_cents() -> bool {
    true
}

fn default_max_amount() -> f64 {
    DEFAULT_MAX_AMOUNT
}

impl Default for LenderConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_lender_bind_addr(),
            data_dir: None,
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_portal_bind_addr(),
        }
    }
}

impl Default for BankLinkConfig {
    fn default() -> Self {
        Self {
            base_url: default_bank_link_base_url(),
            client_id: None,
            secret: None,
            client_name: default_client_name(),
            client_user_id: default_client_user_id(),
            products: default_products(),
            country_codes: default_country_codes(),
            language: default_language(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            lender_url: default_lender_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            allow_cents: default_allow_cents(),
            max_amount: default_max_amount(),
        }
    }
}
