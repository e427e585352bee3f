//! Borrower portal service: canned profile, loan and activity data plus
//! bank-account linking.

mod bank_link;
mod error;
pub mod fixtures;
mod handlers;
mod sessions;

pub use bank_link::{BankLink, BankLinkError, LinkedAccount, PlaidClient};
pub use error::PortalError;
pub use fixtures::{Activity, LoanSummary, UserProfile};
pub use handlers::{build_router, PortalState};
pub use sessions::{SessionRegistry, DEFAULT_MAX_SESSIONS, SESSION_HEADER};

use std::sync::Arc;

use crate::config::PortalConfig;
use crate::server::{HttpServer, ServerError};

/// Bind and serve until shutdown.
pub async fn serve(config: &PortalConfig, bank_link: Arc<dyn BankLink>) -> Result<(), ServerError> {
    let server = HttpServer::bind("portal", &config.bind_addr).await?;
    server.run(build_router(PortalState::new(bank_link))).await
}
