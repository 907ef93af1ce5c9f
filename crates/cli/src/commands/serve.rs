use anyhow::Result;
use std::sync::Arc;

use sqlscout_http::{create_router, AppState};
use sqlscout_service::QueryService;

pub async fn run(service: Arc<QueryService>, host: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState::new(service));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("serving chat UI on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
