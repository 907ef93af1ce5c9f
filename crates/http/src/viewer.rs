//! Chat viewer UI - embedded HTML/CSS/JS served at `/`.
//!
//! Single page with a question box, per-answer blocks (SQL, results,
//! insight, tables used), a client-side Clear Chat control, and a Reset
//! Memory control that clears the server-side conversation log.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

/// Embedded HTML for the chat UI
pub const VIEWER_HTML: &str = include_str!("viewer.html");

/// Serve the chat HTML page
pub async fn serve_viewer() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(VIEWER_HTML))
        .into_response()
}
