//! HTTP API server for sqlscout.

pub mod api_error;
mod handlers;
mod viewer;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use sqlscout_core::Conversation;
use sqlscout_service::QueryService;

pub use handlers::{AskRequest, ResetResponse, TablesResponse};

/// Shared application state for all HTTP handlers.
///
/// The conversation is the server's single chat session, guarded by an
/// `RwLock` so requests mutate history one at a time.
pub struct AppState {
    pub service: Arc<QueryService>,
    pub conversation: RwLock<Conversation>,
}

impl AppState {
    #[must_use]
    pub fn new(service: Arc<QueryService>) -> Self {
        Self { service, conversation: RwLock::new(Conversation::new()) }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(viewer::serve_viewer))
        .route("/health", get(handlers::health))
        .route("/api/ask", post(handlers::ask))
        .route("/api/reset", post(handlers::reset))
        .route("/api/tables", get(handlers::tables))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
