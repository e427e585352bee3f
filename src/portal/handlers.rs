use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use super::bank_link::BankLink;
use super::error::PortalError;
use super::fixtures::{self, LoanSummary};
use super::sessions::{SessionRegistry, SESSION_HEADER};
use crate::server::health;

#[derive(Clone)]
pub struct PortalState {
    sessions: Arc<SessionRegistry>,
    bank_link: Arc<dyn BankLink>,
}

impl PortalState {
    pub fn new(bank_link: Arc<dyn BankLink>) -> Self {
        Self {
            sessions: Arc::new(SessionRegistry::new()),
            bank_link,
        }
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeRequest {
    #[serde(default)]
    public_token: String,
}

pub fn build_router(state: PortalState) -> Router {
    Router::new()
        .route("/health", get(|| health::report("portal")))
        .route("/api/user", get(user))
        .route("/api/loan", get(|| async { Json(LoanSummary::default()) }))
        .route("/api/activities", get(|| async { Json(fixtures::activities()) }))
        .route("/api/create_link_token", post(create_link_token))
        .route("/api/exchange_public_token", post(exchange_public_token))
        .layer(cors_layer())
        .with_state(state)
}

/// The portal dashboard is served from another origin and needs to read the
/// session header.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(SESSION_HEADER)])
}

fn session_of(state: &PortalState, headers: &HeaderMap) -> String {
    let requested = headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok());
    state.sessions.resolve(requested)
}

/// Echo the session id so clients without one learn the id they were given.
fn with_session(session: &str, body: impl IntoResponse) -> Response {
    let mut response = body.into_response();
    if let Ok(value) = HeaderValue::from_str(session) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(SESSION_HEADER), value);
    }
    response
}

async fn user(State(state): State<PortalState>, headers: HeaderMap) -> Response {
    let session = session_of(&state, &headers);
    with_session(&session, Json(state.sessions.profile(&session)))
}

async fn create_link_token(State(state): State<PortalState>) -> Result<Response, PortalError> {
    let token = state
        .bank_link
        .create_link_token()
        .await
        .map_err(PortalError::LinkToken)?;
    Ok(Json(token).into_response())
}

async fn exchange_public_token(
    State(state): State<PortalState>,
    headers: HeaderMap,
    Json(request): Json<ExchangeRequest>,
) -> Result<Response, PortalError> {
    let session = session_of(&state, &headers);
    let account = state
        .bank_link
        .exchange_public_token(&request.public_token)
        .await
        .map_err(PortalError::Exchange)?;

    tracing::info!(%session, bank = %account.bank_name, "Bank account linked");
    state.sessions.link_account(&session, &account);
    Ok(with_session(&session, Json(account)))
}
