use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use sqlscout_core::QueryOutcome;

use crate::api_error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub status: &'static str,
    pub turns_cleared: usize,
}

#[derive(Debug, Serialize)]
pub struct TablesResponse {
    pub tables: Vec<String>,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Run one question through the pipeline against the shared conversation.
///
/// Questions are not validated: an empty question still retrieves the k
/// closest tables and goes to synthesis.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<QueryOutcome>, ApiError> {
    let mut conversation = state.conversation.write().await;
    let outcome = state.service.ask(&request.question, &mut conversation).await?;
    Ok(Json(outcome))
}

/// Clear the conversation log. The schema index is untouched.
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<ResetResponse> {
    let mut conversation = state.conversation.write().await;
    let turns_cleared = conversation.len();
    conversation.clear();
    tracing::info!(turns_cleared, "conversation history reset");
    Json(ResetResponse { status: "ok", turns_cleared })
}

pub async fn tables(State(state): State<Arc<AppState>>) -> Json<TablesResponse> {
    Json(TablesResponse { tables: state.service.indexed_tables() })
}
