//! Lender service: `POST /api/loans` persists a submitted loan form.

mod error;
mod handlers;
pub mod repository;

pub use error::LenderError;
pub use handlers::{build_router, CreatedBody, LenderState, LOANS_COLLECTION};
pub use repository::{FileRepository, InMemoryRepository, LoanRepository, RepositoryError};

use std::sync::Arc;

use crate::config::LenderConfig;
use crate::server::{HttpServer, ServerError};

/// Repository selected by configuration.
pub fn repository_from_config(
    config: &LenderConfig,
) -> Result<Arc<dyn LoanRepository>, RepositoryError> {
    match &config.data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Storing loans on disk");
            Ok(Arc::new(FileRepository::open(dir)?))
        }
        None => {
            tracing::info!("Storing loans in memory");
            Ok(Arc::new(InMemoryRepository::new()))
        }
    }
}

/// Bind and serve until shutdown.
pub async fn serve(
    config: &LenderConfig,
    repository: Arc<dyn LoanRepository>,
) -> Result<(), ServerError> {
    let server = HttpServer::bind("lender", &config.bind_addr).await?;
    server.run(build_router(LenderState::new(repository))).await
}
